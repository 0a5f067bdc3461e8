//! The game engine: one Orthokon game from the opening position to a win.
//!
//! `GameEngine` owns the board, the status and the move counter. The only way
//! to change any of them is to submit a move, which runs the whole pipeline:
//!
//! ```text
//! validate -> slide -> place -> capture -> evaluate termination
//! ```
//!
//! Validation happens entirely before the first write, so a rejected move
//! leaves the engine exactly as it was.
//!
//! ## Concurrency
//!
//! The engine is plain data with no interior mutability. To share one game
//! between threads, wrap it in a `Mutex`; separate games share nothing.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::capture::resolve_captures;
use super::slide::{self, mover_color, resolve_slide};
use super::termination::{evaluate_status, GameStatus};
use crate::core::{Board, BoardSnapshot, Cell, Color, Coordinate, EngineConfig, Move, MoveOutcome};
use crate::error::MoveError;

/// Serializable view of a game for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub status: GameStatus,
    pub move_count: u32,
}

/// A single Orthokon game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    move_count: u32,
    config: EngineConfig,
}

impl GameEngine {
    /// New game in the opening position with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// New game in the opening position.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            move_count: 0,
            config,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the grid.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of successfully applied moves.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Color that must move next, if turns alternate and the game is running.
    #[must_use]
    pub fn to_move(&self) -> Option<Color> {
        if self.is_over() {
            return None;
        }
        self.config.color_to_move(self.move_count)
    }

    /// Moves for `color` that the engine would accept right now.
    ///
    /// Empty once the game is over, and for the waiting color when turns
    /// alternate.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if self.is_over() || self.to_move().is_some_and(|expected| expected != color) {
            return Vec::new();
        }
        slide::legal_moves(&self.board, color)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.snapshot(),
            status: self.status,
            move_count: self.move_count,
        }
    }

    // === Moves ===

    /// Submit a move from raw integer coordinates.
    ///
    /// Off-board input (including negatives) is rejected with
    /// `MoveError::OutOfRange` before anything else is looked at, except a
    /// finished game, which rejects every request with `GameAlreadyOver`.
    pub fn submit_move(
        &mut self,
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
    ) -> Result<MoveOutcome, MoveError> {
        let mv = self
            .ensure_in_progress()
            .and_then(|()| Move::try_new(start_row, start_col, end_row, end_col))
            .map_err(|err| {
                debug!("rejected move ({start_row}, {start_col}) -> ({end_row}, {end_col}): {err}");
                err
            })?;
        self.apply_move(mv)
    }

    /// Slide the piece at `start` so that it comes to rest at `end`.
    pub fn attempt_move(
        &mut self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<MoveOutcome, MoveError> {
        self.apply_move(Move::new(start, end))
    }

    /// Apply `mv`, or report why it is illegal and leave the game untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.try_apply(mv).map_err(|err| {
            debug!("rejected move {mv}: {err}");
            err
        })
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    fn try_apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.ensure_in_progress()?;

        let mover = mover_color(&self.board, mv.start, mv.end)?;
        if let Some(expected) = self.to_move() {
            if expected != mover {
                return Err(MoveError::OutOfTurn {
                    expected,
                    attempted: mover,
                });
            }
        }
        let slide = resolve_slide(&self.board, mv.start, mv.end)?;

        // Validated; from here on the move always completes.
        self.board.set(slide.start, Cell::Empty);
        self.board.set(slide.end, mover.to_cell());
        self.move_count += 1;

        let captured = resolve_captures(&mut self.board, slide.end, mover);
        self.status = evaluate_status(&self.board, mover);

        trace!(
            "move {}: {mover} {mv} ({} spaces), captured {:?}",
            self.move_count,
            slide.spaces,
            captured.as_slice()
        );
        if let Some(winner) = self.status.winner() {
            info!("game over after {} moves: {winner} wins", self.move_count);
        }

        Ok(MoveOutcome {
            mover,
            applied: mv,
            spaces_moved: slide.spaces,
            captured,
            status: self.status,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TOTAL_PIECES;

    fn c(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.to_move(), None);
    }

    #[test]
    fn test_opening_slide_and_capture() {
        let mut engine = GameEngine::new();

        let err = engine.attempt_move(c(0, 0), c(1, 0)).unwrap_err();
        assert!(matches!(err, MoveError::InvalidDestination { .. }));
        assert_eq!(engine.move_count(), 0);

        let outcome = engine.attempt_move(c(0, 0), c(2, 0)).unwrap();
        assert_eq!(outcome.mover, Color::Red);
        assert_eq!(outcome.destination(), c(2, 0));
        assert_eq!(outcome.spaces_moved, 2);
        // (3,0) is orthogonally adjacent to the landing cell
        assert_eq!(outcome.captured.as_slice(), &[c(3, 0)]);
        assert_eq!(outcome.status, GameStatus::InProgress);

        assert_eq!(engine.board().get(c(0, 0)), Cell::Empty);
        assert_eq!(engine.board().get(c(2, 0)), Cell::Red);
        assert_eq!(engine.board().get(c(3, 0)), Cell::Red);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_rejection_leaves_engine_unchanged() {
        let mut engine = GameEngine::new();
        // Red (0,1) -> (2,1) captures Yellow at (3,1)
        engine.attempt_move(c(0, 1), c(2, 1)).unwrap();
        let before = engine.clone();

        assert_eq!(
            engine.submit_move(0, 0, 0, 4),
            Err(MoveError::OutOfRange { row: 0, col: 4 })
        );
        assert_eq!(engine.submit_move(0, 0, 0, 0), Err(MoveError::ZeroDistance(c(0, 0))));
        assert_eq!(engine.submit_move(1, 0, 2, 0), Err(MoveError::EmptySource(c(1, 0))));
        assert_eq!(engine.submit_move(3, 0, 3, 2), Err(MoveError::Blocked(c(3, 0))));
        assert_eq!(
            engine.submit_move(0, 0, 0, 3),
            Err(MoveError::InvalidDestination {
                requested: c(0, 3),
                reachable: c(0, 1),
            })
        );

        assert_eq!(engine, before);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_game_already_over() {
        let mut engine = GameEngine::new();
        for (sr, sc, er, ec) in [(0, 0, 2, 0), (0, 1, 2, 1), (0, 2, 2, 2), (0, 3, 2, 3)] {
            engine.submit_move(sr, sc, er, ec).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::RedWon);
        assert!(engine.is_over());
        assert!(engine.legal_moves(Color::Red).is_empty());

        let before = engine.clone();
        assert_eq!(engine.submit_move(2, 0, 0, 0), Err(MoveError::GameAlreadyOver));
        // Checked ahead of range validation
        assert_eq!(engine.submit_move(9, 9, 9, 9), Err(MoveError::GameAlreadyOver));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_alternating_turns() {
        let config = EngineConfig::default().with_alternating_turns(Color::Red);
        let mut engine = GameEngine::with_config(config);
        assert_eq!(engine.to_move(), Some(Color::Red));
        assert!(engine.legal_moves(Color::Yellow).is_empty());
        assert_eq!(engine.legal_moves(Color::Red).len(), 10);

        assert_eq!(
            engine.submit_move(3, 1, 1, 1),
            Err(MoveError::OutOfTurn {
                expected: Color::Red,
                attempted: Color::Yellow,
            })
        );
        assert_eq!(engine.move_count(), 0);

        engine.submit_move(0, 1, 2, 1).unwrap();
        assert_eq!(engine.to_move(), Some(Color::Yellow));
        assert!(matches!(
            engine.submit_move(0, 0, 2, 0),
            Err(MoveError::OutOfTurn { .. })
        ));
    }

    #[test]
    fn test_out_of_turn_checked_after_empty_source() {
        let config = EngineConfig::default().with_alternating_turns(Color::Yellow);
        let mut engine = GameEngine::with_config(config);
        assert_eq!(engine.submit_move(1, 1, 2, 2), Err(MoveError::EmptySource(c(1, 1))));
    }

    #[test]
    fn test_snapshot() {
        let mut engine = GameEngine::new();
        engine.submit_move(3, 3, 1, 1).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.move_count, 1);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.board[1][1], Cell::Yellow);
        assert_eq!(
            snap.board.iter().flatten().filter(|c| !c.is_empty()).count(),
            TOTAL_PIECES
        );

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
