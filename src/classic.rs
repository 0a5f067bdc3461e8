//! The classic `OrthokonBoard` surface: moves report success as a `bool`,
//! state and cells are plain strings.
//!
//! `ClassicBoard` keeps the reason for the most recent rejection instead of
//! printing it. The Python bindings are a thin layer over this type.

use crate::core::{Cell, Color, EngineConfig, Move};
use crate::error::MoveError;
use crate::rules::{GameEngine, GameStatus};

/// `"UNFINISHED"`, `"RED_WON"` or `"YELLOW_WON"`.
#[must_use]
pub const fn state_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "UNFINISHED",
        GameStatus::RedWon => "RED_WON",
        GameStatus::YellowWon => "YELLOW_WON",
    }
}

/// `"R"`, `"Y"`, or `""` for an empty cell.
#[must_use]
pub const fn cell_label(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "",
        Cell::Red => "R",
        Cell::Yellow => "Y",
    }
}

/// One game behind the classic interface.
#[derive(Clone, Debug, Default)]
pub struct ClassicBoard {
    engine: GameEngine,
    last_error: Option<MoveError>,
}

impl ClassicBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: GameEngine::with_config(config),
            last_error: None,
        }
    }

    /// New game where turns alternate, `first` moving first.
    #[must_use]
    pub fn alternating(first: Color) -> Self {
        Self::with_config(EngineConfig::default().with_alternating_turns(first))
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Try a move. Returns `true` if it was applied.
    ///
    /// A success clears `last_error`; a rejection replaces it.
    pub fn make_move(
        &mut self,
        start_row: i32,
        start_column: i32,
        end_row: i32,
        end_column: i32,
    ) -> bool {
        match self
            .engine
            .submit_move(start_row, start_column, end_row, end_column)
        {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err);
                false
            }
        }
    }

    #[must_use]
    pub fn get_current_state(&self) -> &'static str {
        state_name(self.engine.status())
    }

    /// Copy of the board as rows of cell labels.
    #[must_use]
    pub fn get_board(&self) -> Vec<Vec<&'static str>> {
        self.engine
            .board_snapshot()
            .iter()
            .map(|row| row.iter().map(|&cell| cell_label(cell)).collect())
            .collect()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn get_moves(&self) -> u32 {
        self.engine.move_count()
    }

    /// Why the most recent `make_move` failed, or `None` after a success.
    #[must_use]
    pub fn last_error(&self) -> Option<MoveError> {
        self.last_error
    }

    /// Legal moves for `color` as `(start_row, start_col, end_row, end_col)`.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(usize, usize, usize, usize)> {
        self.engine
            .legal_moves(color)
            .into_iter()
            .map(|Move { start, end }| (start.row(), start.col(), end.row(), end.col()))
            .collect()
    }
}

impl std::fmt::Display for ClassicBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.engine.board())
    }
}
