//! Display functions for game sessions

use super::formatters::{format_wrong_guesses, gallows};
use crate::engine::{GameEngine, Outcome};
use colored::Colorize;

/// Print the welcome banner
pub fn print_welcome(max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HANGMAN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nGuess the word one letter at a time.");
    println!("You can make {max_attempts} wrong guesses before the game is over.");
    println!("Commands: 'new' starts a fresh word, 'quit' exits.");
}

/// Print the gallows, the masked word, and the guess tally
pub fn print_state(game: &GameEngine) {
    println!("\n{}", gallows(game.wrong_guesses().len(), game.max_attempts()));
    println!("\nWord: {}", game.display_word().bold());

    if !game.wrong_guesses().is_empty() {
        println!(
            "Wrong: {}",
            format_wrong_guesses(game.wrong_guesses()).red()
        );
    }

    let remaining = game.attempts_left();
    let shown = if remaining <= 1 {
        remaining.to_string().red().bold()
    } else if remaining <= 2 {
        remaining.to_string().yellow()
    } else {
        remaining.to_string().green()
    };
    println!("Attempts left: {shown}");
}

/// Print the feedback line for a single guess
///
/// Terminal outcomes are silent here; [`print_win`] and [`print_lose`]
/// handle them.
pub fn print_outcome(outcome: Outcome, letter: char) {
    match outcome {
        Outcome::Correct => {
            println!("{}", format!("'{letter}' is in the word!").green());
        }
        Outcome::Incorrect => {
            println!("{}", format!("'{letter}' is not in the word.").red());
        }
        Outcome::Continue => {
            println!("{}", format!("You already tried '{letter}'.").yellow());
        }
        Outcome::Win | Outcome::Lose => {}
    }
}

/// Print the victory banner
pub fn print_win(game: &GameEngine) {
    println!(
        "\n{}",
        format!(
            "🎉 Congratulations! You guessed the word '{}'!",
            game.secret_word()
        )
        .green()
        .bold()
    );
}

/// Print the defeat banner, revealing the word
pub fn print_lose(game: &GameEngine) {
    println!(
        "\n{}",
        format!("❌ Game over! The word was '{}'.", game.secret_word())
            .red()
            .bold()
    );
}
