//! Command implementations for the CLI

mod play;

pub use play::run_play;
