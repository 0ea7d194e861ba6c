//! Simulated play for balancing and benchmarking.
//!
//! Plays complete sessions through the same command API a UI uses, with a
//! pluggable policy standing in for the humans.
//!
//! ## Usage
//!
//! ```
//! use gift_exchange::sim::{Playout, PlayoutConfig};
//!
//! let config = PlayoutConfig::new().with_games(20).with_player_count(4);
//! let stats = Playout::random(config).run().unwrap();
//!
//! assert_eq!(stats.games, 20);
//! ```

pub mod config;
pub mod playout;
pub mod stats;

pub use config::PlayoutConfig;
pub use playout::{Playout, PlayoutPolicy, RandomPolicy};
pub use stats::{GameSummary, PlayoutStats};
