//! Core game types: coordinates, colors, the board, moves, configuration.
//!
//! These are plain data. The rules that act on them live in `crate::rules`.

pub mod board;
pub mod color;
pub mod config;
pub mod coord;
pub mod moves;

pub use board::{Board, BoardSnapshot, Cell, PIECES_PER_COLOR, SIZE, TOTAL_PIECES};
pub use color::Color;
pub use config::{EngineConfig, TurnOrder};
pub use coord::{Coordinate, Direction};
pub use moves::{Captures, Move, MoveOutcome};
