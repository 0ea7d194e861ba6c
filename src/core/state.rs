//! Game state for one play session.
//!
//! ## GameState
//!
//! Everything the presentation layer may read:
//! - Phase (`Setup`, `Playing`, `Ended`)
//! - Roster in the order players were added, with drawn turn positions
//! - Whose turn it is, and who was just stolen from
//! - Cumulative steal counts per victim
//! - Turn bookkeeping (who has had a turn, turn number, action history)
//!
//! Uses `im` persistent collections so a snapshot per rendered frame is
//! O(1). Mutators are crate-private: state only changes through the rules
//! engine, which validates each command first.

use im::{HashMap as ImHashMap, HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerId};

/// Lifecycle phase. Transitions only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Playing => "Playing",
            Phase::Ended => "Ended",
        };
        f.write_str(name)
    }
}

/// Observable state of a gift exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: Phase,

    /// Roster in insertion order.
    players: Vector<Player>,

    /// Player whose action is awaited. `None` between a pile take and the
    /// next `AdvanceTurn`, and once the game has ended.
    current_turn: Option<PlayerId>,

    /// Last player to take from the pile; `AdvanceTurn` searches after them.
    last_actor: Option<PlayerId>,

    /// Times each player has been stolen from. Absent means zero.
    steal_counts: ImHashMap<PlayerId, u32>,

    /// Victim of the immediately preceding steal.
    just_stolen_from: Option<PlayerId>,

    /// Players who have completed at least one take or steal.
    had_turn: ImHashSet<PlayerId>,

    /// Starts at 1 when play begins.
    turn_number: u32,

    history: Vector<ActionRecord>,

    /// Last id handed out; ids start at 1.
    next_player_id: u32,
}

impl GameState {
    /// Create an empty game in `Setup`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Roster in the order players were added.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.current_turn
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_turn.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn last_actor(&self) -> Option<PlayerId> {
        self.last_actor
    }

    #[must_use]
    pub fn steal_counts(&self) -> &ImHashMap<PlayerId, u32> {
        &self.steal_counts
    }

    /// Times `player` has been stolen from.
    #[must_use]
    pub fn steal_count(&self, player: PlayerId) -> u32 {
        self.steal_counts.get(&player).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn just_stolen_from(&self) -> Option<PlayerId> {
        self.just_stolen_from
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn has_had_turn(&self, player: PlayerId) -> bool {
        self.had_turn.contains(&player)
    }

    /// Whether a player's card face should be shown.
    ///
    /// True once they have acted, while it is their turn, or if they drew
    /// the first position.
    #[must_use]
    pub fn is_revealed(&self, player: PlayerId) -> bool {
        self.has_had_turn(player)
            || self.current_turn == Some(player)
            || self.player(player).and_then(|p| p.order) == Some(1)
    }

    /// Players sorted by drawn position. Empty before the game starts.
    #[must_use]
    pub fn turn_order(&self) -> Vec<&Player> {
        let mut ordered: Vec<&Player> = self.players.iter().filter(|p| p.order.is_some()).collect();
        ordered.sort_by_key(|p| p.order);
        ordered
    }

    #[must_use]
    pub fn gift_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_gift).count()
    }

    /// True when every player holds a gift (and there is at least one).
    #[must_use]
    pub fn all_have_gifts(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.has_gift)
    }

    /// Players the current player may steal from, in turn order.
    ///
    /// Empty when nobody's turn is active or when the current player was
    /// just stolen from and must take from the pile.
    #[must_use]
    pub fn steal_targets(&self) -> Vec<PlayerId> {
        let Some(current) = self.current_turn else {
            return Vec::new();
        };
        if self.just_stolen_from == Some(current) {
            return Vec::new();
        }
        self.turn_order()
            .into_iter()
            .filter(|p| p.id != current && p.has_gift)
            .map(|p| p.id)
            .collect()
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn push_player(&mut self, name: &str, icon: &str) -> PlayerId {
        self.next_player_id += 1;
        let id = PlayerId::new(self.next_player_id);
        self.players.push_back(Player::new(id, name, icon));
        id
    }

    pub(crate) fn replace_players(&mut self, players: Vec<Player>) {
        self.players = players.into_iter().collect();
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_current_turn(&mut self, player: Option<PlayerId>) {
        self.current_turn = player;
    }

    pub(crate) fn set_last_actor(&mut self, player: Option<PlayerId>) {
        self.last_actor = player;
    }

    pub(crate) fn set_just_stolen_from(&mut self, player: Option<PlayerId>) {
        self.just_stolen_from = player;
    }

    pub(crate) fn set_has_gift(&mut self, player: PlayerId, has_gift: bool) {
        if let Some(p) = self.players.iter_mut().find(|p| p.id == player) {
            p.has_gift = has_gift;
        }
    }

    pub(crate) fn record_steal_from(&mut self, victim: PlayerId) {
        *self.steal_counts.entry(victim).or_insert(0) += 1;
    }

    pub(crate) fn mark_had_turn(&mut self, player: PlayerId) {
        self.had_turn.insert(player);
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turn_number += 1;
    }

    pub(crate) fn record_action(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(action, self.turn_number, sequence));
    }
}
