//! Structured error types.
//!
//! Every rejected move maps to exactly one `MoveError` variant. A rejection
//! never changes the engine, so callers can retry with corrected input.

use crate::core::{Color, Coordinate};

/// Reasons a move request is rejected, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameAlreadyOver,

    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: i32, col: i32 },

    #[error("start and end are the same cell {0}")]
    ZeroDistance(Coordinate),

    #[error("no piece at {0}")]
    EmptySource(Coordinate),

    #[error("it is {expected}'s turn, not {attempted}'s")]
    OutOfTurn { expected: Color, attempted: Color },

    #[error("piece at {0} cannot move in that direction")]
    Blocked(Coordinate),

    #[error("requested end {requested} but the piece slides to {reachable}")]
    InvalidDestination {
        requested: Coordinate,
        reachable: Coordinate,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A color name that is neither Red nor Yellow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color {0:?}")]
pub struct ParseColorError(pub String);
