//! Game implementations built on the core engine.

pub mod white_elephant;
