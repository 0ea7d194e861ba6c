//! Rules engine trait for the exchange.
//!
//! `RulesEngine` separates what is legal from who is asking: sessions,
//! simulations and language bindings all drive a game through it, and
//! only the engine mutates `GameState`.

pub mod engine;

pub use engine::{GameResult, RulesEngine, Transition};
