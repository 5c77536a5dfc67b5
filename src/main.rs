//! Hangman - CLI
//!
//! Terminal hangman with a configurable word pool, attempt budget, and
//! reproducible word selection.

use anyhow::Result;
use clap::Parser;
use hangman_engine::{
    commands::run_play,
    core::Word,
    engine::{DEFAULT_MAX_ATTEMPTS, SelectorKind},
    wordlists::{DEFAULT_WORDS, loader},
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    /// Path to a word file, one word per line (default: built-in pool)
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,

    /// Wrong guesses allowed before the game is lost
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

/// Load the word pool based on the -w flag
fn load_pool(words: Option<&Path>) -> Result<Vec<Word>> {
    match words {
        Some(path) => Ok(loader::load_from_file(path)?),
        None => Ok(loader::words_from_slice(DEFAULT_WORDS)),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let pool = load_pool(cli.words.as_deref())?;
    let mut selector = SelectorKind::from_seed(cli.seed);

    run_play(&pool, cli.attempts, &mut selector, &mut io::stdin().lock())
        .map_err(|e| anyhow::anyhow!(e))
}
