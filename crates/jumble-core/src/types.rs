use crate::error::JumbleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Grid-size multiplier relative to the hidden word length.
    pub fn multiplier(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// All difficulty levels, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl FromStr for Difficulty {
    type Err = JumbleError;

    /// Exact lowercase labels only; "Easy" is rejected, not normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(JumbleError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Reading direction of the hidden word inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Per-step `(row, col)` offset when reading along this direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Single-letter tag: 'n', 's', 'e' or 'w'.
    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// The target word, validated at construction and immutable afterwards.
///
/// Holds 3 to 10 ASCII letters with the caller's casing preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HiddenWord(String);

impl HiddenWord {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 10;

    /// Validate a candidate word.
    pub fn new(word: &str) -> Result<Self, JumbleError> {
        if word.len() > Self::MAX_LEN {
            return Err(JumbleError::WordTooLong(word.len()));
        }
        if word.len() < Self::MIN_LEN {
            return Err(JumbleError::WordTooShort(word.len()));
        }
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(JumbleError::InvalidCharacter(bad));
        }
        Ok(Self(word.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at `index` in reading order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the word.
    pub fn char_at(&self, index: usize) -> char {
        self.0.as_bytes()[index] as char
    }
}

impl FromStr for HiddenWord {
    type Err = JumbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for HiddenWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
