//! # orthokon
//!
//! Rules engine for Orthokon, a two-player sliding game on a 4×4 board.
//!
//! ## Rules in brief
//!
//! - Red starts on row 0, Yellow on row 3, four pieces each.
//! - A move slides one piece in any of the eight compass directions, as far
//!   as it can go: it stops at the board edge or just before another piece.
//!   Shorter slides are illegal.
//! - Every opposing piece orthogonally adjacent to where the piece lands
//!   switches to the mover's color.
//! - A color wins by owning all eight pieces, or when its opponent has no
//!   piece next to an empty cell.
//!
//! ## Design
//!
//! - **Typed rejections**: every illegal request is a distinct `MoveError`,
//!   and a rejected move leaves the game untouched.
//! - **Caller-owned games**: `GameEngine` is an ordinary value, one per game.
//!   There is no global state and no internal locking.
//! - **No I/O**: rendering, input and persistence belong to the embedding
//!   application. The engine reports through `log` and return values only.
//!
//! ## Modules
//!
//! - `core`: coordinates, colors, board, moves, configuration
//! - `rules`: sliding, captures, termination, and the `GameEngine`
//! - `api`: free-function port over `GameEngine`
//! - `classic`: `ClassicBoard`, the bool-returning string-based surface
//!   used by the Python bindings
//! - `error`: `MoveError` and `ConfigError`
//! - `python`: PyO3 bindings (feature `python`)

pub mod api;
pub mod classic;
pub mod core;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSnapshot, Captures, Cell, Color, Coordinate, Direction, EngineConfig, Move,
    MoveOutcome, TurnOrder,
};

pub use crate::error::{ConfigError, MoveError, ParseColorError};

pub use crate::rules::{GameEngine, GameSnapshot, GameStatus};
