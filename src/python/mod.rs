//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import kalah
//!
//! board = kalah.Board()
//! extra_turn = board.make_move(1)   # True: the last stone hit the house
//!
//! while not board.finished:
//!     board.make_move(board.legal_moves()[0])
//!
//! print(board.winner, board.pits_numpy())
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// kalah: Kalah rules engine.
#[pymodule]
fn kalah(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    Ok(())
}
