//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Stable player identifier. Ids are handed out from a per-session counter
//! starting at 1 and are never reused within a session.
//!
//! ## Player
//!
//! One roster entry: display name, drawn turn position, gift status and a
//! cosmetic icon.

use serde::{Deserialize, Serialize};

/// Icons a new player may be decorated with.
pub const FESTIVE_ICONS: [&str; 16] = [
    "🎅", "🎄", "🎁", "⛄", "🦌", "🔔", "❄️", "🎪",
    "🍪", "🥛", "🧦", "🕯️", "🎉", "🤶", "🛷", "🌟",
];

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the exchange.
///
/// `order` stays `None` until the game starts; afterwards the orders of all
/// players form a permutation of `1..=N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub order: Option<u32>,
    pub has_gift: bool,
    pub icon: String,
}

impl Player {
    /// Create a player with no order and no gift.
    ///
    /// The name is stored trimmed; callers reject blank names beforehand.
    #[must_use]
    pub fn new(id: PlayerId, name: &str, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            order: None,
            has_gift: false,
            icon: icon.into(),
        }
    }

    /// Set the turn position, returning the updated player.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}
