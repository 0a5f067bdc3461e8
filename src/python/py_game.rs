//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::classic::ClassicBoard;
use crate::core::{Color, SIZE};

fn parse_color(name: &str) -> PyResult<Color> {
    name.parse()
        .map_err(|err: crate::error::ParseColorError| PyValueError::new_err(err.to_string()))
}

/// Python wrapper for one Orthokon game.
///
/// Method names follow the classic `OrthokonBoard` interface: `make_move`
/// returns a bool, and the reason for the last rejection is kept in
/// `last_error` instead of being printed.
#[pyclass(name = "OrthokonBoard")]
pub struct PyOrthokonBoard {
    inner: ClassicBoard,
}

#[pymethods]
impl PyOrthokonBoard {
    /// Create a new game.
    ///
    /// # Arguments
    /// - first_player: `None` for free play, or `"red"`/`"yellow"` to
    ///   enforce alternating turns starting with that color
    #[new]
    #[pyo3(signature = (first_player = None))]
    fn new(first_player: Option<&str>) -> PyResult<Self> {
        let inner = match first_player {
            Some(name) => ClassicBoard::alternating(parse_color(name)?),
            None => ClassicBoard::new(),
        };
        Ok(Self { inner })
    }

    /// Try a move. Returns `True` if it was applied.
    fn make_move(
        &mut self,
        start_row: i32,
        start_column: i32,
        end_row: i32,
        end_column: i32,
    ) -> bool {
        self.inner
            .make_move(start_row, start_column, end_row, end_column)
    }

    /// `"UNFINISHED"`, `"RED_WON"` or `"YELLOW_WON"`.
    fn get_current_state(&self) -> &'static str {
        self.inner.get_current_state()
    }

    /// Copy of the board as rows of `"R"`, `"Y"` and `""`.
    fn get_board(&self) -> Vec<Vec<&'static str>> {
        self.inner.get_board()
    }

    /// Number of moves applied so far.
    fn get_moves(&self) -> u32 {
        self.inner.get_moves()
    }

    /// Why the most recent `make_move` failed, or `None` after a success.
    #[getter]
    fn last_error(&self) -> Option<String> {
        self.inner.last_error().map(|err| err.to_string())
    }

    /// Legal moves for a color as `(start_row, start_col, end_row, end_col)`.
    fn legal_moves(&self, color: &str) -> PyResult<Vec<(usize, usize, usize, usize)>> {
        Ok(self.inner.legal_moves(parse_color(color)?))
    }

    /// Board edge length.
    #[getter]
    fn size(&self) -> usize {
        SIZE
    }

    fn __repr__(&self) -> String {
        format!(
            "OrthokonBoard(moves={}, state={})",
            self.inner.get_moves(),
            self.inner.get_current_state()
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
