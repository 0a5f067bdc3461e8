//! Capture resolution.
//!
//! After a piece lands, every orthogonally adjacent piece of the other color
//! is recolored to the mover's color. One pass over the landing cell's
//! neighbors; recolored pieces do not capture in turn.

use crate::core::{Board, Captures, Color, Coordinate};

/// Recolor opposing orthogonal neighbors of `at` to `color`.
///
/// Returns the recolored cells in north/east/south/west order.
pub fn resolve_captures(board: &mut Board, at: Coordinate, color: Color) -> Captures {
    let mut captured = Captures::new();

    for neighbor in at.orthogonal_neighbors() {
        if board.get(neighbor).color() == Some(color.opponent()) {
            board.set(neighbor, color.to_cell());
            captured.push(neighbor);
        }
    }

    captured
}
