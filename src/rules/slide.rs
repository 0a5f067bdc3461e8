//! Move validation and sliding.
//!
//! A piece slides in one of eight directions until the next cell is off the
//! board or occupied. It always travels the full distance: the caller names
//! the destination, and the request is legal only if that is exactly where the
//! slide stops.

use crate::core::{Board, Color, Coordinate, Direction, Move};
use crate::error::MoveError;

/// A maximal slide from `start` in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub start: Coordinate,
    pub end: Coordinate,
    pub direction: Direction,
    /// Cells travelled, always at least 1.
    pub spaces: u8,
}

/// Slide the piece at `start` as far as it goes in `direction`.
///
/// Returns `None` if the first cell in that direction is off the board or
/// occupied. Does not look at what occupies `start`.
#[must_use]
pub fn slide(board: &Board, start: Coordinate, direction: Direction) -> Option<Slide> {
    let mut end = start;
    let mut spaces = 0u8;

    while let Some(next) = end.step(direction) {
        if !board.is_empty_at(next) {
            break;
        }
        end = next;
        spaces += 1;
    }

    (spaces > 0).then_some(Slide {
        start,
        end,
        direction,
        spaces,
    })
}

/// Check that `start -> end` names a piece to move and return its color.
///
/// Covers the zero-distance and empty-source rejections.
pub fn mover_color(board: &Board, start: Coordinate, end: Coordinate) -> Result<Color, MoveError> {
    if start == end {
        return Err(MoveError::ZeroDistance(start));
    }
    board
        .get(start)
        .color()
        .ok_or(MoveError::EmptySource(start))
}

/// Resolve the slide a request implies and check it lands on `end`.
///
/// The direction comes from the signs of the requested displacement, so a
/// knight-like request such as `(0,0) -> (2,1)` is read as south-east and then
/// fails the destination check.
pub fn resolve_slide(
    board: &Board,
    start: Coordinate,
    end: Coordinate,
) -> Result<Slide, MoveError> {
    let direction = Direction::between(start, end).ok_or(MoveError::ZeroDistance(start))?;
    let slide = slide(board, start, direction).ok_or(MoveError::Blocked(start))?;

    if slide.end != end {
        return Err(MoveError::InvalidDestination {
            requested: end,
            reachable: slide.end,
        });
    }
    Ok(slide)
}

/// Every maximal slide available to `color`, piece by piece in row-major
/// order and clockwise from north for each piece.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|&(_, c)| c == color)
        .flat_map(|(at, _)| {
            Direction::ALL
                .into_iter()
                .filter_map(move |d| slide(board, at, d))
                .map(|s| Move::new(s.start, s.end))
        })
        .collect()
}

/// Whether `color` has at least one piece with an empty cell around it.
///
/// Equivalent to `!legal_moves(board, color).is_empty()`, without building
/// the list.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .any(|(at, c)| c == color && board.has_empty_neighbor(at))
}
