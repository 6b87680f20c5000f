//! Puzzle construction: anchor and direction selection plus the grid fill.

use crate::error::JumbleError;
use crate::grid::{Grid, Position};
use crate::rng::{with_process_rng, RandomSource};
use crate::types::{Difficulty, Direction, HiddenWord};
use serde::Serialize;
use std::fmt;

/// A generated word jumble.
///
/// Reading the grid from [`anchor`](Self::anchor) and stepping along
/// [`direction`](Self::direction) for the length of the hidden word spells
/// the word exactly; every other cell holds an independently random
/// lowercase letter. The grid is fully materialized at construction and
/// never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct JumblePuzzle {
    size: usize,
    grid: Grid,
    direction: Direction,
    anchor: Position,
    hidden_word: HiddenWord,
    difficulty: Difficulty,
}

impl JumblePuzzle {
    /// Validate raw inputs and build a puzzle using the process-wide
    /// random stream.
    pub fn new(word: &str, difficulty: &str) -> Result<Self, JumbleError> {
        with_process_rng(|rng| Self::with_rng(word, difficulty, rng))
    }

    /// Validate raw inputs and build a puzzle with the given random source.
    pub fn with_rng<R: RandomSource>(
        word: &str,
        difficulty: &str,
        rng: &mut R,
    ) -> Result<Self, JumbleError> {
        let difficulty = difficulty.parse::<Difficulty>()?;
        let hidden_word = HiddenWord::new(word)?;
        Ok(Self::generate(hidden_word, difficulty, rng))
    }

    /// Build a puzzle from already-validated parts.
    ///
    /// Cannot fail: the size formula guarantees at least one anchor from
    /// which the word fits in some direction.
    pub fn generate<R: RandomSource>(
        hidden_word: HiddenWord,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Self {
        let size = difficulty.multiplier() * hidden_word.len();

        // At multiplier 1 an interior anchor can have no room in any
        // direction; redraw until the word fits. (0, 0) always admits
        // south and east, so the draw terminates.
        let (anchor, valid) = loop {
            let candidate = Position::new(rng.next_below(size), rng.next_below(size));
            let valid = valid_directions(candidate, size, hidden_word.len());
            if !valid.is_empty() {
                break (candidate, valid);
            }
        };
        let direction = valid[rng.next_below(valid.len())];

        let grid = fill_grid(size, direction, anchor, &hidden_word, rng);

        Self {
            size,
            grid,
            direction,
            anchor,
            hidden_word,
            difficulty,
        }
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direction in which the hidden word reads from the anchor.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell holding the hidden word's first character in reading order.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn hidden_word(&self) -> &HiddenWord {
        &self.hidden_word
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Cells covered by the hidden word, anchor first, in reading order.
    pub fn hidden_word_cells(&self) -> Vec<Position> {
        let (row_step, col_step) = self.direction.delta();
        let mut cells = Vec::with_capacity(self.hidden_word.len());
        let mut row = self.anchor.row as isize;
        let mut col = self.anchor.col as isize;
        for _ in 0..self.hidden_word.len() {
            cells.push(Position::new(row as usize, col as usize));
            row += row_step;
            col += col_step;
        }
        cells
    }

    /// Explicit deep duplication of the puzzle, grid included.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl Clone for JumblePuzzle {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            grid: self.grid.deep_clone(),
            direction: self.direction,
            anchor: self.anchor,
            hidden_word: self.hidden_word.clone(),
            difficulty: self.difficulty,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Assigning a puzzle onto itself must leave it untouched
        if std::ptr::eq(self, source) {
            return;
        }
        self.size = source.size;
        self.grid = source.grid.deep_clone();
        self.direction = source.direction;
        self.anchor = source.anchor;
        self.hidden_word = source.hidden_word.clone();
        self.difficulty = source.difficulty;
    }
}

impl fmt::Display for JumblePuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Directions in which the word fits when anchored at `anchor`.
///
/// Evaluated north, south, east, west in that order so an injected source
/// draws the same stream on every run.
fn valid_directions(anchor: Position, size: usize, word_len: usize) -> Vec<Direction> {
    let letters_to_add = word_len - 1;
    let mut valid = Vec::with_capacity(4);
    if anchor.row >= letters_to_add {
        valid.push(Direction::North);
    }
    if anchor.row + letters_to_add < size {
        valid.push(Direction::South);
    }
    if anchor.col + letters_to_add < size {
        valid.push(Direction::East);
    }
    if anchor.col >= letters_to_add {
        valid.push(Direction::West);
    }
    valid
}

/// Fill the whole grid in row-major order.
///
/// Word letters start at the corner cell. For south and east the corner is
/// the anchor itself and the walk writes the word in reading order; for
/// north and west the corner sits `len - 1` cells before the anchor, the
/// walk writes the word backwards, and reading from the anchor against the
/// walk spells it forwards. Every cell not taking a word letter gets an
/// independent draw from the source.
fn fill_grid<R: RandomSource>(
    size: usize,
    direction: Direction,
    anchor: Position,
    word: &HiddenWord,
    rng: &mut R,
) -> Grid {
    let letters_to_add = word.len() - 1;
    let (corner, start_index, step): (Position, isize, isize) = match direction {
        Direction::South | Direction::East => (anchor, 0, 1),
        Direction::North => (
            Position::new(anchor.row - letters_to_add, anchor.col),
            letters_to_add as isize,
            -1,
        ),
        Direction::West => (
            Position::new(anchor.row, anchor.col - letters_to_add),
            letters_to_add as isize,
            -1,
        ),
    };

    let mut grid = Grid::filled(size, 'a');
    let mut word_index = start_index;
    let mut placing = false;
    for row in 0..size {
        for col in 0..size {
            if row == corner.row && col == corner.col {
                placing = true;
            }

            let on_word_line = if direction.is_vertical() {
                col == corner.col
            } else {
                row == corner.row
            };

            let letter = if placing && on_word_line {
                let letter = word.char_at(word_index as usize);
                word_index += step;
                if word_index < 0 || word_index as usize == word.len() {
                    placing = false;
                }
                letter
            } else {
                rng.next_letter()
            };
            grid.set(Position::new(row, col), letter);
        }
    }
    grid
}
