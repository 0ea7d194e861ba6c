//! Staged disclosure of the drawn turn order.
//!
//! The whole order is drawn at once by `StartGame`. A UI that wants to
//! announce positions one by one walks an `OrderReveal` at its own pace;
//! the cursor only reads the already-drawn positions and never redraws.

use crate::core::{GameState, Player};

/// Cursor over players in ascending turn order.
#[derive(Clone, Debug)]
pub struct OrderReveal {
    ordered: Vec<Player>,
    shown: usize,
}

impl OrderReveal {
    /// Start a reveal with nothing shown yet.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        Self {
            ordered: state.turn_order().into_iter().cloned().collect(),
            shown: 0,
        }
    }

    /// Players disclosed so far, lowest position first.
    #[must_use]
    pub fn revealed(&self) -> &[Player] {
        &self.ordered[..self.shown]
    }

    /// `(revealed, total)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.shown, self.ordered.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown == self.ordered.len()
    }
}

impl Iterator for OrderReveal {
    type Item = Player;

    fn next(&mut self) -> Option<Player> {
        let player = self.ordered.get(self.shown)?.clone();
        self.shown += 1;
        Some(player)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ordered.len() - self.shown;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrderReveal {}
