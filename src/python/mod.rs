//! Python bindings for the gift-exchange engine.
//!
//! Lets a Python front end (web or desktop) own a session and render it.
//!
//! # Quick Start
//!
//! ```python
//! import gift_exchange as gx
//!
//! game = gx.GiftExchange(seed=42)
//! for name in ["Ada", "Grace", "Linus"]:
//!     game.add_player(name)
//!
//! first = game.start_game()
//! game.take_from_pile(first)
//! game.advance_turn()
//!
//! print(game.phase(), [p.name for p in game.turn_order()])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::GameError;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// gift_exchange: White Elephant turn and steal engine.
#[pymodule]
fn gift_exchange(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyGiftExchange>()?;
    Ok(())
}
