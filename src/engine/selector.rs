//! Secret-word selection
//!
//! Defines the `WordSelector` trait and concrete implementations. Selection
//! is the only nondeterministic step in the engine, so it sits behind this
//! seam where tests and demos can pin it down.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A selector that picks the secret word for a new game
pub trait WordSelector {
    /// Pick one word from the pool
    ///
    /// Returns the chosen word, or `None` if the pool is empty.
    fn pick<'a>(&mut self, pool: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all selector types
///
/// Allows runtime selection of a selector while maintaining static dispatch.
#[derive(Debug)]
pub enum SelectorKind {
    /// Uniform random selection (default)
    Random(RandomSelector),
    /// Deterministic seeded selection
    Seeded(SeededSelector),
}

impl WordSelector for SelectorKind {
    fn pick<'a>(&mut self, pool: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::Random(s) => s.pick(pool),
            Self::Seeded(s) => s.pick(pool),
        }
    }
}

impl SelectorKind {
    /// Create a selector from an optional seed
    ///
    /// `None` yields the uniform random selector.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededSelector::new(seed)),
            None => Self::Random(RandomSelector),
        }
    }
}

/// Uniform random selection
///
/// The production selector: every pool entry is equally likely.
#[derive(Debug, Default)]
pub struct RandomSelector;

impl WordSelector for RandomSelector {
    fn pick<'a>(&mut self, pool: &'a [Word]) -> Option<&'a Word> {
        pool.choose(&mut rand::rng())
    }
}

/// Seeded random selection
///
/// Deterministic: the same seed over the same pool always yields the same
/// word. Used by tests and the `--seed` flag of the terminal host.
#[derive(Debug)]
pub struct SeededSelector {
    rng: StdRng,
}

impl SeededSelector {
    /// Create a selector seeded with the given value
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSelector for SeededSelector {
    fn pick<'a>(&mut self, pool: &'a [Word]) -> Option<&'a Word> {
        pool.choose(&mut self.rng)
    }
}
