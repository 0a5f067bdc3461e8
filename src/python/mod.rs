//! Python bindings for the Orthokon rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import orthokon
//!
//! game = orthokon.OrthokonBoard()
//! game.make_move(0, 0, 1, 0)   # False: the piece would slide on to (2, 0)
//! print(game.last_error)
//! game.make_move(0, 0, 2, 0)   # True
//! print(game.get_board(), game.get_current_state(), game.get_moves())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// orthokon: rules engine for the Orthokon board game.
#[pymodule]
fn orthokon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOrthokonBoard>()?;
    m.add("BOARD_SIZE", crate::core::SIZE)?;
    Ok(())
}
