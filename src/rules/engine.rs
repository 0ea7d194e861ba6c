//! Rules engine trait and final game result.
//!
//! A rules engine decides:
//! - Which commands are legal in a given state
//! - How a legal command changes the state
//! - When the game is over, and who won

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, GameState, PlayerId};
use crate::error::Result;

/// What an applied command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    PlayerAdded(PlayerId),
    /// Turn order drawn; `first` holds position 1.
    GameStarted { first: PlayerId },
    /// `game_over` is set when this take handed out the last gift.
    GiftTaken { player: PlayerId, game_over: bool },
    /// `victim` becomes the current player.
    GiftStolen { thief: PlayerId, victim: PlayerId },
    TurnAdvanced(PlayerId),
    /// `AdvanceTurn` found nobody left to act.
    GameEnded,
}

/// Result of a completed exchange.
///
/// Winners are the players stolen from the most (their gifts were the most
/// popular). When nobody was ever stolen from, every player ties at zero
/// and `has_winner` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Highest steal count of any player (0 if there were no steals).
    pub max_steals: u32,

    /// Players tied at `max_steals`, in turn order.
    pub winners: SmallVec<[PlayerId; 4]>,
}

impl GameResult {
    /// Compute the result from the steal counts in `state`.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let max_steals = state.steal_counts().values().copied().max().unwrap_or(0);

        let mut ordered = state.turn_order();
        if ordered.is_empty() {
            ordered = state.players().collect();
        }

        let winners = ordered
            .into_iter()
            .filter(|p| state.steal_count(p.id) == max_steals)
            .map(|p| p.id)
            .collect();

        Self { max_steals, winners }
    }

    /// Whether there is a winner worth announcing.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.max_steals > 0
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.has_winner() && self.winners.contains(&player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything; `apply_action` calls it first
///   and returns its error unchanged
/// - `apply_action` either applies fully or not at all
/// - `candidate_actions` may over-approximate; `legal_actions` filters
pub trait RulesEngine {
    /// Check whether `action` is legal in `state`.
    fn validate(&self, state: &GameState, action: &Action) -> Result<()>;

    /// Validate and apply an action.
    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> Result<Transition>;

    /// Commands worth offering in `state`, before validation.
    ///
    /// `AddPlayer` is open-ended and never listed.
    fn candidate_actions(&self, state: &GameState) -> Vec<Action>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether `action` would currently succeed.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.validate(state, action).is_ok()
    }

    /// Enumerate every command that would currently succeed.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        self.candidate_actions(state)
            .into_iter()
            .filter(|action| self.is_legal(state, action))
            .collect()
    }
}
