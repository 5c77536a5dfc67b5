//! Word pools for the hangman engine
//!
//! Provides an embedded default pool compiled into the binary plus loaders
//! for user-supplied word files.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_WORDS;
