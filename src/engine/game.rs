//! Hangman game state machine
//!
//! `GameEngine` owns the secret word, the guessed and wrong letter sets,
//! and the attempt budget. Every guess is classified into an [`Outcome`];
//! once a terminal outcome is produced the engine refuses further guesses.

use super::selector::{RandomSelector, WordSelector};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Default attempt budget, the classic six-stage figure
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The letter was tried before; nothing changed
    Continue,
    /// The letter is in the word, which is not yet fully revealed
    Correct,
    /// The letter is not in the word; attempts remain
    Incorrect,
    /// The guess revealed the last missing letter
    Win,
    /// The guess spent the last attempt
    Lose,
}

impl Outcome {
    /// Check if this outcome ends the game
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Lifecycle of a game session
///
/// `Won` and `Lost` are absorbing: there is no way back to `InProgress`
/// short of starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting guesses
    InProgress,
    /// Every letter of the secret word has been guessed
    Won,
    /// The attempt budget is exhausted
    Lost,
}

impl GameStatus {
    /// Check if the game has reached a terminal status
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for engine construction and guessing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Constructed with an empty word pool
    EmptyWordPool,
    /// Constructed with a zero attempt budget
    ZeroAttemptBudget,
    /// A guess arrived after a terminal outcome
    GameAlreadyOver,
    /// A guess that is not an ASCII letter
    InvalidLetter(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordPool => write!(f, "Word pool must not be empty"),
            Self::ZeroAttemptBudget => write!(f, "Attempt budget must be at least 1"),
            Self::GameAlreadyOver => write!(f, "Game is already over"),
            Self::InvalidLetter(c) => write!(f, "Guess must be an ASCII letter, got {c:?}"),
        }
    }
}

impl std::error::Error for GameError {}

/// Hangman game state
///
/// One instance per session, owned exclusively by the caller. All mutation
/// goes through [`GameEngine::guess`]; everything else is a read-only
/// projection for whatever front end drives the session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    secret: Word,
    max_attempts: usize,
    guessed: FxHashSet<char>,
    wrong: Vec<char>,
    status: GameStatus,
}

impl GameEngine {
    /// Start a new game with a uniformly random secret word
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordPool`] if `pool` has no entries and
    /// [`GameError::ZeroAttemptBudget`] if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Word;
    /// use hangman_engine::engine::GameEngine;
    ///
    /// let pool = vec![Word::new("cat").unwrap()];
    /// let game = GameEngine::new(&pool, 6).unwrap();
    ///
    /// assert_eq!(game.attempts_left(), 6);
    /// assert_eq!(game.display_word(), "_ _ _");
    /// ```
    pub fn new(pool: &[Word], max_attempts: usize) -> Result<Self, GameError> {
        Self::with_selector(pool, max_attempts, &mut RandomSelector)
    }

    /// Start a new game with an injected word selector
    ///
    /// Selection is the only nondeterministic step, so callers that need a
    /// reproducible game pass a seeded selector here.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordPool`] if the selector produces no
    /// word and [`GameError::ZeroAttemptBudget`] if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Word;
    /// use hangman_engine::engine::{GameEngine, SeededSelector};
    ///
    /// let pool = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
    /// let mut selector = SeededSelector::new(42);
    ///
    /// let game = GameEngine::with_selector(&pool, 6, &mut selector).unwrap();
    /// assert!(pool.contains(game.secret_word()));
    /// ```
    pub fn with_selector<S: WordSelector + ?Sized>(
        pool: &[Word],
        max_attempts: usize,
        selector: &mut S,
    ) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::ZeroAttemptBudget);
        }

        let secret = selector.pick(pool).ok_or(GameError::EmptyWordPool)?.clone();
        log::debug!("secret word selected: {secret}");

        Ok(Self {
            secret,
            max_attempts,
            guessed: FxHashSet::default(),
            wrong: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Submit a single-letter guess
    ///
    /// Guessing is case-insensitive: the letter is lowercased before
    /// comparison. Repeating an already-tried letter returns
    /// [`Outcome::Continue`] without changing any state.
    ///
    /// # Errors
    /// Returns [`GameError::GameAlreadyOver`] once a terminal outcome has
    /// been produced, and [`GameError::InvalidLetter`] for characters
    /// outside ASCII `a-z` / `A-Z`; neither changes any state.
    pub fn guess(&mut self, letter: char) -> Result<Outcome, GameError> {
        self.ensure_in_progress()?;

        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_lowercase();

        if self.guessed.contains(&letter) || self.wrong.contains(&letter) {
            return Ok(Outcome::Continue);
        }

        if self.secret.contains(letter) {
            self.guessed.insert(letter);

            if self
                .secret
                .distinct_letters()
                .all(|c| self.guessed.contains(&c))
            {
                self.status = GameStatus::Won;
                return Ok(Outcome::Win);
            }

            Ok(Outcome::Correct)
        } else {
            self.wrong.push(letter);

            if self.wrong.len() >= self.max_attempts {
                self.status = GameStatus::Lost;
                return Ok(Outcome::Lose);
            }

            Ok(Outcome::Incorrect)
        }
    }

    /// Render the word with unguessed letters masked
    ///
    /// Letters are space-separated; unguessed positions show `_`. Pure and
    /// callable at any time, including after termination.
    #[must_use]
    pub fn display_word(&self) -> String {
        let mut out = String::with_capacity(self.secret.letter_count() * 2);
        for (i, c) in self.secret.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.guessed.contains(&c) { c } else { '_' });
        }
        out
    }

    /// Wrong guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong
    }

    /// Wrong guesses remaining before the game is lost
    ///
    /// Reaches exactly zero at the moment [`Outcome::Lose`] is returned.
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts - self.wrong.len()
    }

    /// The attempt budget the game started with
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has reached a terminal outcome
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The secret word
    ///
    /// Front ends reveal it once the game is over; the engine itself never
    /// prints it outside debug logging.
    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret
    }

    /// Check if a letter has been tried, correctly or not
    ///
    /// Case-insensitive like [`GameEngine::guess`]. Front ends use this to
    /// disable inputs that were already spent.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.guessed.contains(&letter) || self.wrong.contains(&letter)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }
}
