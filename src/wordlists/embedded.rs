//! Built-in word pool
//!
//! A small list of common English words, all lowercase ASCII. Used when no
//! word file is supplied on the command line.

/// Default word pool
pub const DEFAULT_WORDS: &[&str] = &[
    "python",
    "hangman",
    "challenge",
    "computer",
    "programming",
    "keyboard",
    "terminal",
    "compiler",
    "function",
    "variable",
    "network",
    "server",
    "client",
    "library",
    "bicycle",
    "elephant",
    "penguin",
    "mountain",
    "journey",
    "whisper",
    "island",
    "bridge",
    "castle",
    "garden",
    "autumn",
    "winter",
    "puzzle",
    "rhythm",
    "oxygen",
    "jungle",
];
