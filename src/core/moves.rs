//! Move requests and their results.
//!
//! A `Move` is what a caller asks for: a start cell and an end cell. Because
//! pieces always slide as far as they can, a request is legal only when `end`
//! is exactly where the slide would stop.
//!
//! A `MoveOutcome` is what the engine reports back after applying one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::coord::Coordinate;
use crate::rules::GameStatus;

/// Cells recolored by a single capture pass. At most four orthogonal neighbors.
pub type Captures = SmallVec<[Coordinate; 4]>;

/// A requested slide from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Move {
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Build a move from raw components, rejecting off-board values.
    pub fn try_new(
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
    ) -> Result<Self, crate::error::MoveError> {
        Ok(Self {
            start: Coordinate::try_new(start_row, start_col)?,
            end: Coordinate::try_new(end_row, end_col)?,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Color of the piece that moved.
    pub mover: Color,

    /// The move as applied.
    pub applied: Move,

    /// Number of cells the piece travelled (at least 1).
    pub spaces_moved: u8,

    /// Opposing pieces recolored to `mover`, in north/east/south/west order.
    pub captured: Captures,

    /// Game status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Where the piece came to rest.
    #[must_use]
    pub fn destination(&self) -> Coordinate {
        self.applied.end
    }

    /// Whether this move ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
}
