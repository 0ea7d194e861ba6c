//! White Elephant rules.

use log::{debug, info};

use crate::core::{assign_order, Action, GameRng, GameState, Phase, PlayerId, SessionConfig};
use crate::error::{GameError, Result};
use crate::rules::{GameResult, RulesEngine, Transition};

/// Minimum roster size for `StartGame`.
pub const MIN_PLAYERS: usize = 2;

/// Rules of the exchange plus the randomness they consume.
///
/// Order draws and icon picks use separate RNG streams derived from the
/// session seed.
#[derive(Clone, Debug)]
pub struct WhiteElephant {
    config: SessionConfig,
    order_rng: GameRng,
    icon_rng: GameRng,
}

impl WhiteElephant {
    /// Create the rules for a session.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let root = GameRng::new(config.seed);
        Ok(Self {
            order_rng: root.for_context("order"),
            icon_rng: root.for_context("icons"),
            config,
        })
    }

    /// Get the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn pick_icon(&mut self) -> Result<String> {
        self.icon_rng
            .choose(&self.config.icons)
            .cloned()
            .ok_or(GameError::EmptyPalette)
    }
}

/// Next player in turn order after `last` who holds no gift.
///
/// Wraps past the end of the order. With no `last`, the search starts at
/// position 1. Returns `None` if everybody holds a gift.
#[must_use]
pub fn next_eligible_after(state: &GameState, last: Option<PlayerId>) -> Option<PlayerId> {
    let order = state.turn_order();
    if order.is_empty() {
        return None;
    }

    let start = last
        .and_then(|id| order.iter().position(|p| p.id == id))
        .map_or(0, |i| i + 1);

    (0..order.len())
        .map(|offset| order[(start + offset) % order.len()])
        .find(|p| !p.has_gift)
        .map(|p| p.id)
}

fn require_phase(state: &GameState, action: &Action, phase: Phase) -> Result<()> {
    if state.phase() != phase {
        return Err(GameError::InvalidPhase {
            command: action.name(),
            phase: state.phase(),
        });
    }
    Ok(())
}

fn require_current(state: &GameState, player: PlayerId) -> Result<()> {
    if state.player(player).is_none() {
        return Err(GameError::UnknownPlayer(player));
    }
    if state.current_turn() != Some(player) {
        return Err(GameError::NotCurrentPlayer(player));
    }
    Ok(())
}

impl RulesEngine for WhiteElephant {
    fn validate(&self, state: &GameState, action: &Action) -> Result<()> {
        match action {
            Action::AddPlayer { name } => {
                require_phase(state, action, Phase::Setup)?;
                if name.trim().is_empty() {
                    return Err(GameError::EmptyName);
                }
            }
            Action::StartGame => {
                require_phase(state, action, Phase::Setup)?;
                if state.player_count() < MIN_PLAYERS {
                    return Err(GameError::InsufficientPlayers(state.player_count()));
                }
            }
            Action::TakeFromPile { player } => {
                require_phase(state, action, Phase::Playing)?;
                require_current(state, *player)?;
            }
            Action::StealGift { player, from } => {
                require_phase(state, action, Phase::Playing)?;
                require_current(state, *player)?;
                // Someone who was just robbed has to replace their gift first
                if state.just_stolen_from() == Some(*player) {
                    return Err(GameError::ForcedPileTake(*player));
                }
                let holds_gift = state.player(*from).is_some_and(|p| p.has_gift);
                if from == player || !holds_gift {
                    return Err(GameError::InvalidStealTarget(*from));
                }
            }
            Action::AdvanceTurn => {
                require_phase(state, action, Phase::Playing)?;
                if let Some(current) = state.current_turn() {
                    return Err(GameError::TurnInProgress(current));
                }
            }
        }
        Ok(())
    }

    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> Result<Transition> {
        self.validate(state, action)?;

        let transition = match action {
            Action::AddPlayer { name } => {
                let icon = self.pick_icon()?;
                let id = state.push_player(name, &icon);
                debug!("added {} as {:?}", id, name.trim());
                Transition::PlayerAdded(id)
            }
            Action::StartGame => {
                let roster: Vec<_> = state.players().cloned().collect();
                let ordered = assign_order(&roster, &mut self.order_rng);
                let first = ordered
                    .iter()
                    .find(|p| p.order == Some(1))
                    .map(|p| p.id)
                    .ok_or(GameError::InsufficientPlayers(ordered.len()))?;

                state.replace_players(ordered);
                state.set_phase(Phase::Playing);
                state.set_current_turn(Some(first));
                state.set_just_stolen_from(None);
                state.begin_turn();
                info!("game started with {} players, {} goes first", state.player_count(), first);
                Transition::GameStarted { first }
            }
            Action::TakeFromPile { player } => {
                state.set_has_gift(*player, true);
                state.mark_had_turn(*player);
                state.set_just_stolen_from(None);
                state.set_last_actor(Some(*player));
                state.set_current_turn(None);

                let game_over = state.all_have_gifts();
                if game_over {
                    state.set_phase(Phase::Ended);
                    info!("{} took the last gift, game over", player);
                } else {
                    debug!("{} took a gift from the pile", player);
                }
                Transition::GiftTaken {
                    player: *player,
                    game_over,
                }
            }
            Action::StealGift { player, from } => {
                state.set_has_gift(*player, true);
                state.set_has_gift(*from, false);
                state.record_steal_from(*from);
                state.mark_had_turn(*player);
                state.set_current_turn(Some(*from));
                state.set_just_stolen_from(Some(*from));
                debug!(
                    "{} stole from {} ({} steals so far)",
                    player,
                    from,
                    state.steal_count(*from)
                );
                Transition::GiftStolen {
                    thief: *player,
                    victim: *from,
                }
            }
            Action::AdvanceTurn => match next_eligible_after(state, state.last_actor()) {
                Some(next) => {
                    state.set_current_turn(Some(next));
                    state.begin_turn();
                    debug!("turn {}: {}", state.turn_number(), next);
                    Transition::TurnAdvanced(next)
                }
                None => {
                    // Unreachable while pile takes check for the end, but
                    // never leave the game without anyone to act.
                    state.set_phase(Phase::Ended);
                    info!("no player left without a gift, game over");
                    Transition::GameEnded
                }
            },
        };

        state.record_action(action.clone());
        Ok(transition)
    }

    fn candidate_actions(&self, state: &GameState) -> Vec<Action> {
        match state.phase() {
            Phase::Setup => vec![Action::StartGame],
            Phase::Playing => match state.current_turn() {
                Some(player) => {
                    let mut actions = vec![Action::TakeFromPile { player }];
                    actions.extend(
                        state
                            .steal_targets()
                            .into_iter()
                            .map(|from| Action::StealGift { player, from }),
                    );
                    actions
                }
                None => vec![Action::AdvanceTurn],
            },
            Phase::Ended => Vec::new(),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        (state.phase() == Phase::Ended).then(|| GameResult::from_state(state))
    }
}
