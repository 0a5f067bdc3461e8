//! Free-function port for presentation and session layers.
//!
//! Each function is a thin wrapper over the matching `GameEngine` method, for
//! callers that prefer a procedural surface (FFI shims, scripting bridges).
//!
//! ```
//! use orthokon::api::{board_snapshot, current_status, move_count, new_game, submit_move};
//! use orthokon::core::Cell;
//! use orthokon::rules::{GameStatus, MoveError};
//!
//! let mut game = new_game();
//! assert!(matches!(
//!     submit_move(&mut game, 0, 0, 1, 0),
//!     Err(MoveError::InvalidDestination { .. })
//! ));
//! submit_move(&mut game, 0, 0, 2, 0).unwrap();
//!
//! assert_eq!(board_snapshot(&game)[2][0], Cell::Red);
//! assert_eq!(move_count(&game), 1);
//! assert_eq!(current_status(&game), GameStatus::InProgress);
//! ```

use crate::core::{BoardSnapshot, MoveOutcome};
use crate::error::MoveError;
use crate::rules::{GameEngine, GameStatus};

/// Start a game in the opening position.
#[must_use]
pub fn new_game() -> GameEngine {
    GameEngine::new()
}

/// Attempt a move. On error the game is unchanged.
pub fn submit_move(
    engine: &mut GameEngine,
    start_row: i32,
    start_col: i32,
    end_row: i32,
    end_col: i32,
) -> Result<MoveOutcome, MoveError> {
    engine.submit_move(start_row, start_col, end_row, end_col)
}

#[must_use]
pub fn current_status(engine: &GameEngine) -> GameStatus {
    engine.status()
}

/// Owned copy of the board; writing to it does not affect the game.
#[must_use]
pub fn board_snapshot(engine: &GameEngine) -> BoardSnapshot {
    engine.board_snapshot()
}

#[must_use]
pub fn move_count(engine: &GameEngine) -> u32 {
    engine.move_count()
}
