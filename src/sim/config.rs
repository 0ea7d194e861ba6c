//! Playout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Configuration for a batch of simulated sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Number of sessions to play.
    pub games: u32,

    /// Roster added to every session, in this order.
    pub player_names: Vec<String>,

    /// Chance that a player steals when a steal is legal.
    pub steal_probability: f64,

    /// Session `i` is seeded with `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 100,
            player_names: numbered_names(6),
            steal_probability: 0.5,
            seed_offset: 0,
        }
    }
}

impl PlayoutConfig {
    /// Create a new playout config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sessions.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Use `count` generated names ("Player 1", "Player 2", ...).
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_names = numbered_names(count);
        self
    }

    /// Use the given roster.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the steal probability.
    pub fn with_steal_probability(mut self, probability: f64) -> Self {
        self.steal_probability = probability;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Reject a steal probability that is NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.steal_probability) {
            return Err(GameError::InvalidProbability(self.steal_probability.to_string()));
        }
        Ok(())
    }

    /// Seed for the session with the given index.
    #[must_use]
    pub fn seed_for(&self, game_index: u32) -> u64 {
        self.seed_offset.wrapping_add(game_index as u64)
    }
}

fn numbered_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {}", i)).collect()
}
