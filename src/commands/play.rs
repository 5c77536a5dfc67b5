//! Interactive play mode
//!
//! Text-based game loop driving one engine session after another from any
//! line source. Taking `BufRead` instead of locking stdin here keeps the
//! whole loop scriptable in tests.

use crate::core::Word;
use crate::engine::{GameEngine, GameError, Outcome, WordSelector};
use crate::output::display;
use std::io::{self, BufRead, Write};

/// One parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerInput {
    Guess(char),
    NewGame,
    Quit,
    Unusable,
}

/// Run the interactive play mode
///
/// Sessions repeat until the player quits, declines a rematch, or the
/// input source runs dry. Commands are whole words ("quit", "exit",
/// "new") so that every single character stays available as a guess.
///
/// # Errors
///
/// Returns an error if input cannot be read or a session cannot be
/// started from `pool`.
pub fn run_play<R, S>(
    pool: &[Word],
    max_attempts: usize,
    selector: &mut S,
    reader: &mut R,
) -> Result<(), String>
where
    R: BufRead,
    S: WordSelector + ?Sized,
{
    display::print_welcome(max_attempts);

    let mut game = new_session(pool, max_attempts, selector)?;
    display::print_state(&game);

    loop {
        let Some(line) = read_player_line(reader, "Guess a letter")? else {
            return farewell();
        };

        match parse_input(&line) {
            PlayerInput::Quit => return farewell(),
            PlayerInput::NewGame => {
                game = new_session(pool, max_attempts, selector)?;
                println!("\n🔄 New game started!");
                display::print_state(&game);
            }
            PlayerInput::Unusable => {
                println!("Guess a single letter (or 'quit' / 'new').");
            }
            PlayerInput::Guess(letter) => match game.guess(letter) {
                Ok(outcome) => {
                    display::print_outcome(outcome, letter);
                    display::print_state(&game);

                    match outcome {
                        Outcome::Win => display::print_win(&game),
                        Outcome::Lose => display::print_lose(&game),
                        _ => continue,
                    }

                    let Some(answer) = read_player_line(reader, "Play again? (yes/no)")? else {
                        return farewell();
                    };

                    match answer.to_lowercase().as_str() {
                        "yes" | "y" => {
                            game = new_session(pool, max_attempts, selector)?;
                            println!("\n🔄 New game started!");
                            display::print_state(&game);
                        }
                        _ => return farewell(),
                    }
                }
                Err(GameError::InvalidLetter(c)) => {
                    println!("'{c}' is not a letter.");
                }
                Err(e) => return Err(e.to_string()),
            },
        }
    }
}

fn new_session<S: WordSelector + ?Sized>(
    pool: &[Word],
    max_attempts: usize,
    selector: &mut S,
) -> Result<GameEngine, String> {
    GameEngine::with_selector(pool, max_attempts, selector).map_err(|e| e.to_string())
}

fn parse_input(line: &str) -> PlayerInput {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "quit" | "exit" => PlayerInput::Quit,
        "new" => PlayerInput::NewGame,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => PlayerInput::Guess(c),
                _ => PlayerInput::Unusable,
            }
        }
    }
}

/// Read one line, prompting first; `None` means the source is exhausted
fn read_player_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("\n{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let n = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if n == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

fn farewell() -> Result<(), String> {
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RandomSelector;
    use std::io::Cursor;

    fn pool_of(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn parse_recognizes_commands() {
        assert_eq!(parse_input("quit"), PlayerInput::Quit);
        assert_eq!(parse_input("  EXIT  "), PlayerInput::Quit);
        assert_eq!(parse_input("new"), PlayerInput::NewGame);
    }

    #[test]
    fn parse_single_char_is_guess() {
        assert_eq!(parse_input("a"), PlayerInput::Guess('a'));
        assert_eq!(parse_input(" Q "), PlayerInput::Guess('q'));
        assert_eq!(parse_input("7"), PlayerInput::Guess('7'));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(parse_input(""), PlayerInput::Unusable);
        assert_eq!(parse_input("ab"), PlayerInput::Unusable);
        assert_eq!(parse_input("play"), PlayerInput::Unusable);
    }

    #[test]
    fn session_quits_on_command() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("quit\n");

        assert_eq!(run_play(&pool, 6, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_ends_at_eof() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("");

        assert_eq!(run_play(&pool, 6, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_wins_and_declines_rematch() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("c\na\nt\nno\n");

        assert_eq!(run_play(&pool, 6, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_loses_and_declines_rematch() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("z\nno\n");

        assert_eq!(run_play(&pool, 1, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_survives_junk_input() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("hello\n\n4\nquit\n");

        assert_eq!(run_play(&pool, 6, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_restarts_on_new_command() {
        let pool = pool_of(&["cat"]);
        let mut input = Cursor::new("z\nnew\nquit\n");

        assert_eq!(run_play(&pool, 6, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn session_replays_after_win() {
        let pool = pool_of(&["a"]);
        let mut input = Cursor::new("a\nyes\na\nno\n");

        assert_eq!(run_play(&pool, 3, &mut RandomSelector, &mut input), Ok(()));
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut input = Cursor::new("quit\n");

        assert!(run_play(&[], 6, &mut RandomSelector, &mut input).is_err());
    }
}
