//! The 4×4 Orthokon board.
//!
//! ## Layout
//!
//! ```text
//!   0 1 2 3
//! 0 R R R R    <- Red home row
//! 1 . . . .
//! 2 . . . .
//! 3 Y Y Y Y    <- Yellow home row
//! ```
//!
//! The board is only written by the rules pipeline (`crate::rules`); callers
//! outside the crate get read access and owned snapshots.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coord::Coordinate;

/// Board edge length.
pub const SIZE: usize = 4;

/// Pieces each color starts with.
pub const PIECES_PER_COLOR: usize = SIZE;

/// Pieces on the board at all times. Captures recolor but never remove.
pub const TOTAL_PIECES: usize = 2 * PIECES_PER_COLOR;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Color of the piece in this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Color::Red),
            Cell::Yellow => Some(Color::Yellow),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character rendering: `R`, `Y` or `.`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// An owned copy of every cell, indexed `[row][col]`.
pub type BoardSnapshot = [[Cell; SIZE]; SIZE];

/// Grid of cells with fixed 4×4 dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: BoardSnapshot,
}

impl Board {
    /// Starting position: Red on row 0, Yellow on row 3.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[0] = [Cell::Red; SIZE];
        cells[SIZE - 1] = [Cell::Yellow; SIZE];
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.row()][at.col()]
    }

    pub(crate) fn set(&mut self, at: Coordinate, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    #[must_use]
    pub fn is_empty_at(&self, at: Coordinate) -> bool {
        self.get(at).is_empty()
    }

    /// Owned copy of the grid. Mutating it has no effect on the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.cells
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of pieces of `color`.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.count(color.to_cell())
    }

    /// Every occupied cell with its piece color, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Color)> + '_ {
        Coordinate::all().filter_map(move |at| self.get(at).color().map(|color| (at, color)))
    }

    /// Whether any of the up-to-eight cells around `at` is empty.
    ///
    /// A piece can slide somewhere exactly when this holds.
    #[must_use]
    pub fn has_empty_neighbor(&self, at: Coordinate) -> bool {
        at.moore_neighbors().any(|n| self.is_empty_at(n))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a board from four row strings of `R`, `Y` and `.`.
#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; SIZE]) -> Board {
    let mut cells = [[Cell::Empty; SIZE]; SIZE];
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), SIZE, "row {r} must have {SIZE} cells");
        for (c, ch) in line.chars().enumerate() {
            cells[r][c] = match ch {
                'R' => Cell::Red,
                'Y' => Cell::Yellow,
                '.' => Cell::Empty,
                other => panic!("unexpected cell symbol {other:?}"),
            };
        }
    }
    Board { cells }
}
