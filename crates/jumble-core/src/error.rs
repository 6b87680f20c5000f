use thiserror::Error;

/// Validation failure reported when constructing a puzzle.
///
/// All failures are terminal for that construction attempt; there is no
/// partially built puzzle to recover.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumbleError {
    /// Difficulty label was not one of the three recognized strings.
    #[error("difficulty must be either easy, medium or hard, got \"{0}\"")]
    InvalidDifficulty(String),

    /// Hidden word is longer than 10 characters.
    #[error("word must not be greater than 10 characters, got {0}")]
    WordTooLong(usize),

    /// Hidden word is shorter than 3 characters.
    #[error("word must not be less than 3 characters, got {0}")]
    WordTooShort(usize),

    /// Hidden word contains a character outside a-z/A-Z.
    #[error("only characters between a-z are allowed, got {0:?}")]
    InvalidCharacter(char),
}
