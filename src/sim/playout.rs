//! Simulated sessions driven by a policy.

use log::{debug, info};

use crate::core::{Action, GameRng, GameState};
use crate::error::Result;
use crate::games::white_elephant::GiftExchange;
use crate::rules::{GameResult, Transition};

use super::config::PlayoutConfig;
use super::stats::{GameSummary, PlayoutStats};

/// Picks the next command for a simulated session.
pub trait PlayoutPolicy {
    /// Choose one of `legal`, or `None` to stop.
    fn choose(&self, state: &GameState, legal: &[Action], rng: &mut GameRng) -> Option<Action>;
}

/// Steals with a fixed probability whenever stealing is allowed.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    pub steal_probability: f64,
}

impl RandomPolicy {
    pub fn new(steal_probability: f64) -> Self {
        Self { steal_probability }
    }
}

impl PlayoutPolicy for RandomPolicy {
    fn choose(&self, _state: &GameState, legal: &[Action], rng: &mut GameRng) -> Option<Action> {
        let steals: Vec<&Action> = legal
            .iter()
            .filter(|a| matches!(a, Action::StealGift { .. }))
            .collect();

        if !steals.is_empty() && rng.gen_bool(self.steal_probability) {
            return rng.choose(&steals).map(|a| (*a).clone());
        }

        legal
            .iter()
            .find(|a| !matches!(a, Action::StealGift { .. }))
            .cloned()
    }
}

/// Runs batches of sessions and collects statistics.
pub struct Playout<P: PlayoutPolicy> {
    policy: P,
    config: PlayoutConfig,
    rng: GameRng,
}

impl Playout<RandomPolicy> {
    /// Playout with a `RandomPolicy` using the configured steal probability.
    pub fn random(config: PlayoutConfig) -> Self {
        let policy = RandomPolicy::new(config.steal_probability);
        Self::new(policy, config)
    }
}

impl<P: PlayoutPolicy> Playout<P> {
    pub fn new(policy: P, config: PlayoutConfig) -> Self {
        let rng = GameRng::new(config.seed_offset).for_context("policy");
        Self { policy, config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Play one session to the end.
    ///
    /// Returns the finished session alongside its summary so callers can
    /// inspect the final state.
    pub fn play_game(&mut self, game_index: u32) -> Result<(GiftExchange, GameSummary)> {
        self.config.validate()?;
        let seed = self.config.seed_for(game_index);
        let mut session = GiftExchange::with_seed(seed)?;
        for name in &self.config.player_names {
            session.add_player(name)?;
        }
        session.start_game()?;

        let mut policy_rng = self.rng.fork();
        let mut actions = 0u32;
        let mut steals = 0u32;

        loop {
            let legal = session.legal_actions();
            let Some(action) = self.policy.choose(session.state(), &legal, &mut policy_rng) else {
                break;
            };
            if let Transition::GiftStolen { .. } = session.apply(&action)? {
                steals += 1;
            }
            actions += 1;
        }

        let result = GameResult::from_state(session.state());
        let winning_positions = if result.has_winner() {
            result
                .winners
                .iter()
                .filter_map(|&id| session.state().player(id).and_then(|p| p.order))
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            "game {} (seed {}): {} actions, {} steals, max {} on one player",
            game_index, seed, actions, steals, result.max_steals
        );

        let summary = GameSummary {
            seed,
            actions,
            steals,
            result,
            winning_positions,
        };
        Ok((session, summary))
    }

    /// Play every configured session.
    pub fn run(&mut self) -> Result<PlayoutStats> {
        self.config.validate()?;
        let mut stats = PlayoutStats::new();
        for game_index in 0..self.config.games {
            let (_, summary) = self.play_game(game_index)?;
            stats.record(&summary);
        }
        info!(
            "played {} games: {:.1} actions and {:.2} steals per game",
            stats.games,
            stats.mean_actions(),
            stats.mean_steals()
        );
        Ok(stats)
    }
}
