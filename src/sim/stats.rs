//! Aggregate statistics over simulated sessions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::GameResult;

/// Outcome of one simulated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Seed the session was created with.
    pub seed: u64,

    /// Commands applied after the roster was entered.
    pub actions: u32,

    /// Successful steals.
    pub steals: u32,

    pub result: GameResult,

    /// Turn-order positions of the winners (empty when nobody won).
    pub winning_positions: Vec<u32>,
}

/// Running totals across many sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayoutStats {
    pub games: u32,
    pub total_actions: u64,
    pub total_steals: u64,

    /// Highest single-player steal count in any session.
    pub max_steals_seen: u32,

    /// Sessions that ended without a single steal.
    pub games_without_winner: u32,

    /// Wins per turn-order position. Ties credit every tied position.
    pub wins_by_position: FxHashMap<u32, u32>,
}

impl PlayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one session into the totals.
    pub fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        self.total_actions += summary.actions as u64;
        self.total_steals += summary.steals as u64;
        self.max_steals_seen = self.max_steals_seen.max(summary.result.max_steals);

        if !summary.result.has_winner() {
            self.games_without_winner += 1;
        }
        for &position in &summary.winning_positions {
            *self.wins_by_position.entry(position).or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn mean_actions(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_actions as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn mean_steals(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_steals as f64 / self.games as f64
        }
    }

    /// Fraction of sessions in which `position` was among the winners.
    #[must_use]
    pub fn win_rate(&self, position: u32) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = self.wins_by_position.get(&position).copied().unwrap_or(0);
        wins as f64 / self.games as f64
    }
}
