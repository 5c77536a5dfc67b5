//! Hangman Engine
//!
//! A letter-guessing game engine with strict termination semantics and a
//! swappable word-selection seam, plus a colored terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_engine::core::Word;
//! use hangman_engine::engine::{GameEngine, Outcome};
//!
//! // Build a pool and start a game
//! let pool = vec![Word::new("cat").unwrap()];
//! let mut game = GameEngine::new(&pool, 6).unwrap();
//!
//! // Guess letters until the word is revealed
//! assert_eq!(game.guess('c').unwrap(), Outcome::Correct);
//! assert_eq!(game.display_word(), "c _ _");
//! ```

// Core domain types
pub mod core;

// Game state machine and word selection
pub mod engine;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
