//! Board coordinates, compass directions, and neighbor iteration.
//!
//! A `Coordinate` is always on the board: construction from raw integers goes
//! through [`Coordinate::try_new`], which rejects anything outside `[0, 3]`.
//! Neighbor scans (orthogonal for captures, Moore for move availability) share
//! one offset-table walker so bounds checking lives in a single place.

use serde::{Deserialize, Serialize};

use super::board::SIZE;
use crate::error::MoveError;

/// A cell position on the 4×4 board.
///
/// Row 0 is Red's home row, row 3 is Yellow's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate from raw components.
    ///
    /// ```
    /// use orthokon::core::Coordinate;
    ///
    /// assert!(Coordinate::try_new(3, 0).is_ok());
    /// assert!(Coordinate::try_new(4, 0).is_err());
    /// assert!(Coordinate::try_new(0, -1).is_err());
    /// ```
    pub fn try_new(row: i32, col: i32) -> Result<Self, MoveError> {
        if Self::in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Const constructor for positions known to be on the board.
    ///
    /// Use [`Coordinate::try_new`] for untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`SIZE`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < SIZE && (col as usize) < SIZE, "coordinate off the board");
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
    }

    /// The coordinate at `(row + dr, col + dc)`, or `None` if that is off the board.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Self::try_new(row, col).ok()
    }

    /// One step in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        self.offset(dr, dc)
    }

    /// Up to four in-grid neighbors: up, right, down, left.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        self.neighbors(&Direction::ORTHOGONAL)
    }

    /// Up to eight in-grid neighbors (the Moore neighborhood).
    pub fn moore_neighbors(self) -> impl Iterator<Item = Coordinate> {
        self.neighbors(&Direction::ALL)
    }

    fn neighbors(self, directions: &'static [Direction]) -> impl Iterator<Item = Coordinate> {
        directions.iter().filter_map(move |&d| self.step(d))
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE as u8).flat_map(|row| (0..SIZE as u8).map(move |col| Coordinate { row, col }))
    }
}

impl TryFrom<[i32; 2]> for Coordinate {
    type Error = MoveError;

    fn try_from([row, col]: [i32; 2]) -> Result<Self, Self::Error> {
        Self::try_new(row, col)
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(c: Coordinate) -> Self {
        [c.row as i32, c.col as i32]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions a piece may slide in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four orthogonal directions, clockwise from north.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row_step, col_step)`; north is toward row 0.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Derive a direction from a requested displacement.
    ///
    /// Only the sign of each component matters, so `(2, 1)` maps to
    /// south-east just like `(1, 1)`. Returns `None` for `(0, 0)`.
    #[must_use]
    pub fn from_delta(dr: i32, dc: i32) -> Option<Direction> {
        match (dr.signum(), dc.signum()) {
            (-1, 0) => Some(Direction::North),
            (-1, 1) => Some(Direction::NorthEast),
            (0, 1) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (1, 0) => Some(Direction::South),
            (1, -1) => Some(Direction::SouthWest),
            (0, -1) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Direction of travel from `from` toward `to`.
    #[must_use]
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Direction> {
        Self::from_delta(
            to.row() as i32 - from.row() as i32,
            to.col() as i32 - from.col() as i32,
        )
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Coordinate::try_new(0, 0).unwrap(), Coordinate::new(0, 0));
        assert_eq!(Coordinate::try_new(3, 3).unwrap(), Coordinate::new(3, 3));
        assert_eq!(
            Coordinate::try_new(-1, 2),
            Err(MoveError::OutOfRange { row: -1, col: 2 })
        );
        assert_eq!(
            Coordinate::try_new(1, 4),
            Err(MoveError::OutOfRange { row: 1, col: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "coordinate off the board")]
    fn test_new_panics_off_board() {
        let _ = Coordinate::new(4, 0);
    }

    #[test]
    fn test_step_stops_at_edges() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::SouthEast), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_orthogonal_neighbors_clipped() {
        let corner: Vec<_> = Coordinate::new(0, 0).orthogonal_neighbors().collect();
        assert_eq!(corner, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);

        let center: Vec<_> = Coordinate::new(1, 1).orthogonal_neighbors().collect();
        assert_eq!(center.len(), 4);
        assert!(center.iter().all(|c| {
            let dr = c.row().abs_diff(1);
            let dc = c.col().abs_diff(1);
            dr + dc == 1
        }));
    }

    #[test]
    fn test_moore_neighbor_counts() {
        assert_eq!(Coordinate::new(0, 0).moore_neighbors().count(), 3);
        assert_eq!(Coordinate::new(0, 2).moore_neighbors().count(), 5);
        assert_eq!(Coordinate::new(2, 1).moore_neighbors().count(), 8);
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Coordinate::new(0, 0));
        assert_eq!(all[5], Coordinate::new(1, 1));
        assert_eq!(all[15], Coordinate::new(3, 3));
    }

    #[test]
    fn test_direction_from_delta_uses_sign_only() {
        assert_eq!(Direction::from_delta(2, 0), Some(Direction::South));
        assert_eq!(Direction::from_delta(-3, 3), Some(Direction::NorthEast));
        assert_eq!(Direction::from_delta(2, 1), Some(Direction::SouthEast));
        assert_eq!(Direction::from_delta(0, -2), Some(Direction::West));
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_direction_deltas_round_trip() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
        assert_eq!(Direction::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }

    #[test]
    fn test_coordinate_serialization() {
        let c = Coordinate::new(2, 3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[2,3]");
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Coordinate>("[5,0]").is_err());
    }
}
