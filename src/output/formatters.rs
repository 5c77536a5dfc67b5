//! Formatting utilities for terminal output

/// Gallows drawings, one per stage of the figure
const GALLOWS_STAGES: [&str; 7] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Pick the gallows drawing for the current wrong-guess count
///
/// Progress through the attempt budget is scaled onto the seven stages, so
/// the figure completes exactly when the budget runs out regardless of how
/// large the budget is.
#[must_use]
pub fn gallows(wrong_count: usize, max_attempts: usize) -> &'static str {
    let last = GALLOWS_STAGES.len() - 1;
    if max_attempts == 0 {
        return GALLOWS_STAGES[last];
    }

    let stage = (wrong_count * last / max_attempts).min(last);
    GALLOWS_STAGES[stage]
}

/// Format wrong guesses as a comma-separated list
#[must_use]
pub fn format_wrong_guesses(wrong: &[char]) -> String {
    let mut result = String::with_capacity(wrong.len() * 3);
    for (i, c) in wrong.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        result.push(*c);
    }
    result
}
