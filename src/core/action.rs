//! Commands the presentation layer can issue, and their history records.
//!
//! A command names a transition of the game state machine. Player-driven
//! commands carry the acting player's id so the engine can check that it
//! is really that player's turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A command issued against a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Add a player to the roster (setup only).
    AddPlayer { name: String },
    /// Draw turn order and begin play.
    StartGame,
    /// The current player claims an unopened gift.
    TakeFromPile { player: PlayerId },
    /// The current player takes a held gift from another player.
    StealGift { player: PlayerId, from: PlayerId },
    /// Reveal who acts next after a pile take.
    AdvanceTurn,
}

impl Action {
    /// Short command name used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "AddPlayer",
            Action::StartGame => "StartGame",
            Action::TakeFromPile { .. } => "TakeFromPile",
            Action::StealGift { .. } => "StealGift",
            Action::AdvanceTurn => "AdvanceTurn",
        }
    }

    /// Whether this action claims or moves a gift.
    #[must_use]
    pub fn is_gift_move(&self) -> bool {
        matches!(self, Action::TakeFromPile { .. } | Action::StealGift { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::AddPlayer { name } => write!(f, "AddPlayer({:?})", name),
            Action::StartGame => write!(f, "StartGame"),
            Action::TakeFromPile { player } => write!(f, "TakeFromPile({})", player),
            Action::StealGift { player, from } => write!(f, "StealGift({} <- {})", player, from),
            Action::AdvanceTurn => write!(f, "AdvanceTurn"),
        }
    }
}

/// An applied action with its position in the game.
///
/// Only successful commands are recorded; rejections leave no trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Turn number when the action was applied (0 during setup).
    pub turn: u32,

    /// Position in the game's history, starting at 0.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}
