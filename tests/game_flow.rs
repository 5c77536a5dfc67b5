// Integration tests for the hangman engine
// These tests drive full game sessions through the public API

use hangman_engine::commands::run_play;
use hangman_engine::core::Word;
use hangman_engine::engine::{
    GameEngine, GameError, GameStatus, Outcome, SeededSelector, SelectorKind, WordSelector,
};
use hangman_engine::wordlists::{DEFAULT_WORDS, loader::words_from_slice};
use std::io::Cursor;

/// Pool of one word makes the session fully deterministic
fn single_word_game(word: &str, max_attempts: usize) -> GameEngine {
    let pool = vec![Word::new(word).unwrap()];
    GameEngine::new(&pool, max_attempts).unwrap()
}

#[test]
fn winning_session_reveals_word_step_by_step() {
    let mut game = single_word_game("cat", 3);
    assert_eq!(game.display_word(), "_ _ _");
    assert_eq!(game.attempts_left(), 3);

    assert_eq!(game.guess('c').unwrap(), Outcome::Correct);
    assert_eq!(game.display_word(), "c _ _");

    assert_eq!(game.guess('x').unwrap(), Outcome::Incorrect);
    assert_eq!(game.attempts_left(), 2);
    assert_eq!(game.wrong_guesses(), &['x']);

    assert_eq!(game.guess('a').unwrap(), Outcome::Correct);
    assert_eq!(game.guess('t').unwrap(), Outcome::Win);
    assert_eq!(game.display_word(), "c a t");
    assert_eq!(game.status(), GameStatus::Won);

    // The engine refuses anything after the win
    assert_eq!(game.guess('z'), Err(GameError::GameAlreadyOver));
}

#[test]
fn losing_session_exhausts_the_budget() {
    let mut game = single_word_game("dog", 2);

    assert_eq!(game.guess('x').unwrap(), Outcome::Incorrect);
    assert_eq!(game.attempts_left(), 1);

    assert_eq!(game.guess('y').unwrap(), Outcome::Lose);
    assert_eq!(game.attempts_left(), 0);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.wrong_guesses(), &['x', 'y']);

    assert_eq!(game.guess('d'), Err(GameError::GameAlreadyOver));
}

#[test]
fn repeated_guesses_never_spend_attempts() {
    let mut game = single_word_game("dog", 2);
    game.guess('d').unwrap();
    game.guess('x').unwrap();

    for _ in 0..5 {
        assert_eq!(game.guess('d').unwrap(), Outcome::Continue);
        assert_eq!(game.guess('x').unwrap(), Outcome::Continue);
    }

    assert_eq!(game.attempts_left(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn attempts_left_never_increases() {
    let mut game = single_word_game("programming", 6);
    let mut previous = game.attempts_left();

    for letter in 'a'..='z' {
        if game.is_over() {
            break;
        }
        game.guess(letter).unwrap();

        let now = game.attempts_left();
        assert!(now <= previous);
        previous = now;
    }

    assert!(game.is_over());
}

#[test]
fn win_fires_only_on_the_final_distinct_letter() {
    let mut game = single_word_game("banana", 6);

    assert_eq!(game.guess('b').unwrap(), Outcome::Correct);
    assert_eq!(game.guess('a').unwrap(), Outcome::Correct);
    assert_eq!(game.display_word(), "b a _ a _ a");
    assert_eq!(game.guess('n').unwrap(), Outcome::Win);
    assert_eq!(game.display_word(), "b a n a n a");
}

#[test]
fn uppercase_and_lowercase_guesses_are_equivalent() {
    let mut upper = single_word_game("cat", 6);
    let mut lower = single_word_game("cat", 6);

    for (a, b) in [('C', 'c'), ('A', 'a'), ('T', 't')] {
        assert_eq!(upper.guess(a).unwrap(), lower.guess(b).unwrap());
    }

    assert_eq!(upper.display_word(), lower.display_word());
    assert_eq!(upper.status(), GameStatus::Won);
}

#[test]
fn display_word_shape_matches_the_secret() {
    let pool = words_from_slice(DEFAULT_WORDS);

    for seed in 0..20_u64 {
        let game =
            GameEngine::with_selector(&pool, 6, &mut SeededSelector::new(seed)).unwrap();
        let display = game.display_word();

        // "_ _ _" style: letters at even indices, spaces between
        assert_eq!(display.len(), game.secret_word().letter_count() * 2 - 1);
        assert!(display.chars().step_by(2).all(|c| c == '_'));
        assert!(display.chars().skip(1).step_by(2).all(|c| c == ' '));
    }
}

#[test]
fn same_seed_selects_the_same_word() {
    let pool = words_from_slice(DEFAULT_WORDS);

    for seed in [0, 1, 7, 42, u64::MAX] {
        let mut a = SelectorKind::from_seed(Some(seed));
        let mut b = SelectorKind::from_seed(Some(seed));

        assert_eq!(a.pick(&pool), b.pick(&pool));
    }
}

#[test]
fn default_pool_supports_a_full_game() {
    let pool = words_from_slice(DEFAULT_WORDS);
    assert_eq!(pool.len(), DEFAULT_WORDS.len());

    let mut game =
        GameEngine::with_selector(&pool, 6, &mut SeededSelector::new(7)).unwrap();
    let secret = game.secret_word().clone();

    // Spell the secret word straight out of the engine
    let mut last = Outcome::Continue;
    for letter in secret.distinct_letters() {
        last = game.guess(letter).unwrap();
    }

    assert_eq!(last, Outcome::Win);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.display_word().replace(' ', ""), secret.text());
}

#[test]
fn scripted_session_plays_to_a_win() {
    // One word in the pool, so the script can spell it out exactly
    let pool = vec![Word::new("dog").unwrap()];
    let mut selector = SelectorKind::from_seed(Some(3));
    let mut input = Cursor::new("d\no\ng\nno\n");

    assert_eq!(run_play(&pool, 6, &mut selector, &mut input), Ok(()));
}

#[test]
fn scripted_session_handles_junk_then_quits() {
    let pool = words_from_slice(DEFAULT_WORDS);
    let mut selector = SelectorKind::from_seed(Some(9));
    let mut input = Cursor::new("too long\n\n9\nx\nquit\n");

    assert_eq!(run_play(&pool, 6, &mut selector, &mut input), Ok(()));
}

#[test]
fn scripted_rematch_starts_a_fresh_word() {
    let pool = vec![Word::new("a").unwrap()];
    let mut selector = SelectorKind::from_seed(Some(0));
    let mut input = Cursor::new("a\nyes\nz\na\nno\n");

    assert_eq!(run_play(&pool, 2, &mut selector, &mut input), Ok(()));
}
