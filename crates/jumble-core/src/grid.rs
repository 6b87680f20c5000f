use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square letter grid, stored row-major in a single owned buffer.
///
/// Cloning is structurally deep; two grids never share cell storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    pub(crate) fn filled(size: usize, letter: char) -> Self {
        Self {
            size,
            cells: vec![letter; size * size],
        }
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Overwrite the letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, letter: char) {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position ({}, {}) outside a {size}x{size} grid",
            pos.row,
            pos.col,
            size = self.size,
        );
        self.cells[pos.row * self.size + pos.col] = letter;
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }

    /// Structurally independent copy of the grid.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, letter) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_round_trip() {
        let mut grid = Grid::filled(4, 'x');
        grid.set(Position::new(2, 3), 'q');

        assert_eq!(grid.get(Position::new(2, 3)), Some('q'));
        assert_eq!(grid.get(Position::new(0, 0)), Some('x'));
    }

    #[test]
    fn get_outside_the_grid_is_none() {
        let grid = Grid::filled(3, 'x');

        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }

    #[test]
    fn deep_clone_does_not_alias() {
        let grid = Grid::filled(3, 'x');
        let mut copy = grid.deep_clone();
        copy.set(Position::new(1, 1), '#');

        assert_eq!(grid.get(Position::new(1, 1)), Some('x'));
        assert_eq!(copy.get(Position::new(1, 1)), Some('#'));
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let mut grid = Grid::filled(2, 'a');
        grid.set(Position::new(0, 1), 'b');
        grid.set(Position::new(1, 0), 'c');

        assert_eq!(grid.to_string(), "a b\nc a\n");
    }
}
