//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;

/// Read-only snapshot of a player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.get()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// Turn position, or None before the game starts.
    #[getter]
    fn order(&self) -> Option<u32> {
        self.0.order
    }

    #[getter]
    fn has_gift(&self) -> bool {
        self.0.has_gift
    }

    #[getter]
    fn icon(&self) -> String {
        self.0.icon.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Player(id={}, name={:?}, order={:?}, has_gift={})",
            self.0.id.get(),
            self.0.name,
            self.0.order,
            self.0.has_gift
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
