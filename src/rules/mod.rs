//! Orthokon rules.
//!
//! - `slide`: move validation, maximal slides, legal-move enumeration
//! - `capture`: orthogonal color flips after a piece lands
//! - `termination`: elimination and blocked-loss detection
//! - `engine`: `GameEngine`, which runs all of the above for one game
//!
//! The free functions operate on a `Board` and never check whose game it is;
//! `GameEngine` is the only place state actually changes.

pub mod capture;
pub mod engine;
pub mod slide;
pub mod termination;

pub use crate::error::MoveError;
pub use capture::resolve_captures;
pub use engine::{GameEngine, GameSnapshot};
pub use slide::{has_legal_move, legal_moves, Slide};
pub use termination::{evaluate_status, GameStatus};
