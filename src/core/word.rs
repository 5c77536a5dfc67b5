//! Hangman word representation
//!
//! A Word stores a lowercase word along with its distinct-letter set, so
//! guess classification and win detection are set lookups.

use rustc_hash::FxHashSet;
use std::fmt;

/// A validated hangman word
///
/// Guaranteed non-empty and ASCII alphabetic, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word must contain only ASCII letters, got {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation, so pool files may mix
    /// cases freely.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - The input contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Word;
    ///
    /// let word = Word::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: FxHashSet<char> = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    ///
    /// The text is all ASCII, so byte length equals letter count.
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.len()
    }

    /// Iterate the letters in order, including repeats
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate the distinct letters of the word, in no particular order
    #[inline]
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
