//! Game status and termination.
//!
//! Two ways to win, both checked after every move:
//! - **Elimination**: one color holds all eight pieces.
//! - **Blocked loss**: a color with no piece next to an empty cell cannot
//!   move and loses.
//!
//! ## Precedence
//!
//! 1. Elimination is checked first and settles the game on its own.
//! 2. If exactly one color is blocked, the other color wins.
//! 3. If both colors are blocked, the color that just moved wins: its
//!    opponent is the one left without a move.
//!
//! Case 3 cannot arise from legal play (eight pieces on sixteen cells always
//! leave some piece beside an empty cell) but the rule keeps the evaluator
//! total.

use serde::{Deserialize, Serialize};

use super::slide::has_legal_move;
use crate::core::{Board, Color, TOTAL_PIECES};

/// Game status. Terminal values never change back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    RedWon,
    YellowWon,
}

impl GameStatus {
    /// Status for a win by `color`.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::Red => GameStatus::RedWon,
            Color::Yellow => GameStatus::YellowWon,
        }
    }

    /// The winning color, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::RedWon => Some(Color::Red),
            GameStatus::YellowWon => Some(Color::Yellow),
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(color) => write!(f, "{color} won"),
            None => f.write_str("in progress"),
        }
    }
}

/// Evaluate the board after `last_mover` has moved.
#[must_use]
pub fn evaluate_status(board: &Board, last_mover: Color) -> GameStatus {
    if let Some(color) = Color::BOTH
        .into_iter()
        .find(|&color| board.count_color(color) == TOTAL_PIECES)
    {
        return GameStatus::won_by(color);
    }

    let red_blocked = !has_legal_move(board, Color::Red);
    let yellow_blocked = !has_legal_move(board, Color::Yellow);

    match (red_blocked, yellow_blocked) {
        (false, false) => GameStatus::InProgress,
        (true, false) => GameStatus::YellowWon,
        (false, true) => GameStatus::RedWon,
        (true, true) => GameStatus::won_by(last_mover),
    }
}
