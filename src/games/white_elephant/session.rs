//! A play session: the rules and the state they govern.
//!
//! `GiftExchange` is what a presentation layer holds on to. It offers the
//! five commands by name, each returning either what changed or why the
//! command was refused. A refused command never changes anything.
//!
//! "Play again" means dropping the session and creating a new one.

use log::debug;

use crate::core::{Action, GameState, Phase, PlayerId, SessionConfig};
use crate::error::{GameError, Result};
use crate::rules::{GameResult, RulesEngine, Transition};

use super::game::WhiteElephant;
use super::reveal::OrderReveal;

/// One gift exchange, from roster entry to final result.
#[derive(Clone, Debug)]
pub struct GiftExchange {
    rules: WhiteElephant,
    state: GameState,
}

impl GiftExchange {
    /// Create a session in `Setup` with no players.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            rules: WhiteElephant::new(config)?,
            state: GameState::new(),
        })
    }

    /// Create a session with the default palette and the given seed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(SessionConfig::new().with_seed(seed))
    }

    /// Current state. Cloning it is cheap.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &WhiteElephant {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Apply any command.
    pub fn apply(&mut self, action: &Action) -> Result<Transition> {
        self.rules
            .apply_action(&mut self.state, action)
            .map_err(|err| {
                debug!("rejected {}: {}", action, err);
                err
            })
    }

    // === Commands ===

    /// Add a player during setup. Blank names are refused with `EmptyName`.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        let Transition::PlayerAdded(id) = self.apply(&Action::AddPlayer { name: name.to_string() })? else {
            return Err(GameError::UnexpectedTransition { command: "AddPlayer" });
        };
        Ok(id)
    }

    /// Like [`add_player`](Self::add_player), but a blank name is a quiet
    /// no-op that returns `Ok(None)`.
    pub fn try_add_player(&mut self, name: &str) -> Result<Option<PlayerId>> {
        match self.add_player(name) {
            Ok(id) => Ok(Some(id)),
            Err(err) if err.is_silent() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Draw turn order and begin play. Returns who goes first.
    pub fn start_game(&mut self) -> Result<PlayerId> {
        let Transition::GameStarted { first } = self.apply(&Action::StartGame)? else {
            return Err(GameError::UnexpectedTransition { command: "StartGame" });
        };
        Ok(first)
    }

    pub fn take_from_pile(&mut self, player: PlayerId) -> Result<Transition> {
        self.apply(&Action::TakeFromPile { player })
    }

    pub fn steal_gift(&mut self, player: PlayerId, from: PlayerId) -> Result<Transition> {
        self.apply(&Action::StealGift { player, from })
    }

    pub fn advance_turn(&mut self) -> Result<Transition> {
        self.apply(&Action::AdvanceTurn)
    }

    // === Derived views ===

    /// Commands that would currently succeed (excluding `AddPlayer`).
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Walk the drawn turn order one position at a time.
    #[must_use]
    pub fn order_reveal(&self) -> OrderReveal {
        OrderReveal::new(&self.state)
    }
}
