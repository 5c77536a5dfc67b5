//! Core domain types
//!
//! Pure, construction-validated types with no I/O and no randomness.

mod word;

pub use word::{Word, WordError};
