//! White Elephant gift exchange.
//!
//! - Players draw a random turn order
//! - On your turn: take an unopened gift from the pile, or steal a held one
//! - Whoever is stolen from acts next and must take from the pile
//! - The game ends when everyone holds a gift; the most-robbed players win

mod game;
mod reveal;
mod session;

pub use game::{next_eligible_after, WhiteElephant, MIN_PLAYERS};
pub use reveal::OrderReveal;
pub use session::GiftExchange;
