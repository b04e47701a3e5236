//! Board bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, BoardConfig};

/// Python pit number as an engine index.
///
/// Negative pits are off the board like any other out-of-range index.
fn pit_index(pit: i64) -> usize {
    usize::try_from(pit).unwrap_or(usize::MAX)
}

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a new board.
    ///
    /// # Arguments
    /// - pits_per_player: Sowing pits on each side
    /// - initial_stones: Stones in every sowing pit at the start
    #[new]
    #[pyo3(signature = (pits_per_player = 6, initial_stones = 6))]
    fn new(pits_per_player: usize, initial_stones: u32) -> PyResult<Self> {
        let config = BoardConfig::try_new(pits_per_player, initial_stones).map_err(value_error)?;
        Ok(Self(Board::with_config(config)))
    }

    /// Play the stones in `pit` for the current player.
    ///
    /// Returns True if the same player moves again. Raises ValueError for
    /// illegal moves, leaving the board unchanged.
    fn make_move(&mut self, pit: i64) -> PyResult<bool> {
        self.0
            .make_move(pit_index(pit))
            .map(|report| report.extra_turn)
            .map_err(value_error)
    }

    /// Pits the current player may move.
    fn legal_moves(&self) -> Vec<usize> {
        self.0.legal_moves().collect()
    }

    /// Stone counts for every slot, starting at pit 1.
    #[getter]
    fn pits(&self) -> Vec<u32> {
        self.0.pits().to_vec()
    }

    /// Stone counts as a numpy array.
    fn pits_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.0.pits())
    }

    /// Player to move: 1 or 2.
    #[getter]
    fn turn(&self) -> u8 {
        self.0.turn().number()
    }

    /// Whether the game is over.
    #[getter]
    fn finished(&self) -> bool {
        self.0.is_finished()
    }

    /// Winning player (1 or 2), None while playing or on a draw.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.0.winner().map(|player| player.number())
    }

    /// Copy the board for simulation.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let status = match self.0.outcome() {
            None => format!("turn=P{}", self.0.turn().number()),
            Some(result) => match result.winner() {
                Some(player) => format!("winner=P{}", player.number()),
                None => "draw".to_string(),
            },
        };
        format!("Board(pits={:?}, {})", self.0.pits(), status)
    }
}
