//! Error types for the gift-exchange engine.
//!
//! Every variant rejects a single command and leaves the game untouched.
//! None of them are fatal; the presentation layer decides how to surface
//! them (usually by disabling the matching button).

use thiserror::Error;

use crate::core::{Phase, PlayerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{command} is not allowed during the {phase} phase")]
    InvalidPhase { command: &'static str, phase: Phase },

    #[error("at least 2 players are needed to start, have {0}")]
    InsufficientPlayers(usize),

    #[error("{0} is not the current player")]
    NotCurrentPlayer(PlayerId),

    #[error("cannot steal from {0}")]
    InvalidStealTarget(PlayerId),

    #[error("{0} was just stolen from and must take a gift from the pile")]
    ForcedPileTake(PlayerId),

    #[error("player name is empty")]
    EmptyName,

    #[error("a turn is already in progress for {0}")]
    TurnInProgress(PlayerId),

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("icon palette is empty")]
    EmptyPalette,

    #[error("steal probability must be within [0, 1], got {0}")]
    InvalidProbability(String),

    #[error("{command} produced an unexpected transition")]
    UnexpectedTransition { command: &'static str },
}

impl GameError {
    /// Whether this rejection is a forgiving no-op the UI can ignore.
    ///
    /// Blank names are swallowed by the input form rather than reported.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, GameError::EmptyName)
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
