//! Session bindings for Python.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{PlayerId, SessionConfig};
use crate::games::white_elephant::GiftExchange;

use super::py_core::PyPlayer;

/// Python wrapper for a gift-exchange session.
///
/// Refused commands raise `ValueError` and leave the session unchanged.
#[pyclass(name = "GiftExchange")]
pub struct PyGiftExchange {
    session: GiftExchange,
}

#[pymethods]
impl PyGiftExchange {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic turn orders
    /// - icons: Optional replacement icon palette
    #[new]
    #[pyo3(signature = (seed = 42, icons = None))]
    fn new(seed: u64, icons: Option<Vec<String>>) -> PyResult<Self> {
        let mut config = SessionConfig::new().with_seed(seed);
        if let Some(icons) = icons {
            config = config.with_icons(icons);
        }
        Ok(Self {
            session: GiftExchange::new(config)?,
        })
    }

    // === Commands ===

    /// Add a player, returning their id. A blank name is ignored and
    /// returns `None`.
    fn add_player(&mut self, name: &str) -> PyResult<Option<u32>> {
        Ok(self.session.try_add_player(name)?.map(PlayerId::get))
    }

    /// Draw turn order, returning the id of the first player.
    fn start_game(&mut self) -> PyResult<u32> {
        Ok(self.session.start_game()?.get())
    }

    fn take_from_pile(&mut self, player: u32) -> PyResult<()> {
        self.session.take_from_pile(PlayerId::new(player))?;
        Ok(())
    }

    fn steal_gift(&mut self, player: u32, victim: u32) -> PyResult<()> {
        self.session
            .steal_gift(PlayerId::new(player), PlayerId::new(victim))?;
        Ok(())
    }

    fn advance_turn(&mut self) -> PyResult<()> {
        self.session.advance_turn()?;
        Ok(())
    }

    // === Queries ===

    /// "Setup", "Playing" or "Ended".
    fn phase(&self) -> String {
        self.session.phase().to_string()
    }

    /// Roster in the order players were added.
    fn players(&self) -> Vec<PyPlayer> {
        self.session.state().players().cloned().map(PyPlayer).collect()
    }

    /// Roster sorted by turn position.
    fn turn_order(&self) -> Vec<PyPlayer> {
        self.session
            .state()
            .turn_order()
            .into_iter()
            .cloned()
            .map(PyPlayer)
            .collect()
    }

    fn current_turn(&self) -> Option<u32> {
        self.session.state().current_turn().map(PlayerId::get)
    }

    fn just_stolen_from(&self) -> Option<u32> {
        self.session.state().just_stolen_from().map(PlayerId::get)
    }

    fn steal_counts(&self) -> HashMap<u32, u32> {
        self.session
            .state()
            .steal_counts()
            .iter()
            .map(|(id, count)| (id.get(), *count))
            .collect()
    }

    fn steal_targets(&self) -> Vec<u32> {
        self.session
            .state()
            .steal_targets()
            .into_iter()
            .map(PlayerId::get)
            .collect()
    }

    fn is_revealed(&self, player: u32) -> bool {
        self.session.state().is_revealed(PlayerId::new(player))
    }

    /// Winners once the game has ended with at least one steal.
    fn winners(&self) -> Option<Vec<u32>> {
        self.session
            .result()
            .filter(|r| r.has_winner())
            .map(|r| r.winners.iter().map(|id| id.get()).collect())
    }

    /// Full state as JSON.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self.session.state())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "GiftExchange(phase={}, players={})",
            self.session.phase(),
            self.session.state().player_count()
        )
    }
}
