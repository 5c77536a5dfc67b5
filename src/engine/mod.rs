//! Game engine and word selection

mod game;
mod selector;

pub use game::{DEFAULT_MAX_ATTEMPTS, GameEngine, GameError, GameStatus, Outcome};
pub use selector::{RandomSelector, SeededSelector, SelectorKind, WordSelector};
