//! Core engine types: players, state, actions, RNG, configuration.
//!
//! These are the building blocks the rules engine validates and mutates.
//! Nothing here knows the rules of the exchange itself.

pub mod player;
pub mod rng;
pub mod shuffle;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, FESTIVE_ICONS};
pub use rng::GameRng;
pub use shuffle::assign_order;
pub use config::SessionConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameState, Phase};
