//! # gift-exchange
//!
//! Turn and steal engine for White Elephant style gift exchanges.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A session is a pure state machine over seeded
//!    randomness. Same seed and same commands give the same game.
//!
//! 2. **All-or-nothing commands**: Every command either applies fully or is
//!    refused with a `GameError`, leaving the state untouched.
//!
//! 3. **No timers**: Staged reveals and dramatic pauses belong to the
//!    presentation layer, which reads the state as often as it likes.
//!
//! ## Quick Start
//!
//! ```
//! use gift_exchange::{GiftExchange, Phase};
//!
//! let mut game = GiftExchange::with_seed(7).unwrap();
//! game.add_player("Ada").unwrap();
//! game.add_player("Grace").unwrap();
//!
//! let first = game.start_game().unwrap();
//! game.take_from_pile(first).unwrap();
//! game.advance_turn().unwrap();
//!
//! let second = game.state().current_turn().unwrap();
//! game.take_from_pile(second).unwrap();
//!
//! assert_eq!(game.phase(), Phase::Ended);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, turn-order draw, configuration
//! - `rules`: `RulesEngine` trait and the final `GameResult`
//! - `games`: The White Elephant rules and the `GiftExchange` session
//! - `sim`: Policy-driven playouts and aggregate statistics
//! - `error`: `GameError` taxonomy

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameRng, GameState, Phase, Player, PlayerId, SessionConfig,
    assign_order, FESTIVE_ICONS,
};

pub use crate::error::{GameError, Result};

pub use crate::rules::{GameResult, RulesEngine, Transition};

pub use crate::games::white_elephant::{GiftExchange, OrderReveal, WhiteElephant};

pub use crate::sim::{Playout, PlayoutConfig, PlayoutStats};
