//! Session configuration.
//!
//! A session is configured once when it is created. Rule variants (steal
//! limits and the like) are deliberately not configurable; only the seed
//! and the cosmetic icon palette are.

use serde::{Deserialize, Serialize};

use super::player::FESTIVE_ICONS;
use crate::error::{GameError, Result};

/// Configuration for a single play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for turn-order and icon draws.
    /// Same seed and same commands produce the same game.
    pub seed: u64,

    /// Icons new players are decorated with.
    pub icons: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            icons: FESTIVE_ICONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    /// Create a config with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the icon palette.
    pub fn with_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.icons = icons.into_iter().map(Into::into).collect();
        self
    }

    /// Check the config can back a session.
    pub fn validate(&self) -> Result<()> {
        if self.icons.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        Ok(())
    }
}
