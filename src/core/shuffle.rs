//! Turn-order draw.
//!
//! Each player receives an independent random key; sorting by key and
//! numbering the sorted positions `1..=N` yields a uniformly distributed
//! permutation. Comparator-based shuffles (sorting with a random
//! comparison) are biased and are not used.

use rustc_hash::FxHashSet;

use super::player::Player;
use super::rng::GameRng;

/// Assign every player a unique `order` in `1..=N`.
///
/// Returns a fresh roster in the same sequence as the input; the input is
/// not modified. Key collisions are redrawn so ties never bias the result.
#[must_use]
pub fn assign_order(players: &[Player], rng: &mut GameRng) -> Vec<Player> {
    let keys = draw_distinct_keys(players.len(), rng);

    let mut ranked: Vec<usize> = (0..players.len()).collect();
    ranked.sort_unstable_by_key(|&i| keys[i]);

    let mut orders = vec![0u32; players.len()];
    for (position, &index) in ranked.iter().enumerate() {
        orders[index] = position as u32 + 1;
    }

    players
        .iter()
        .zip(orders)
        .map(|(player, order)| player.clone().with_order(order))
        .collect()
}

fn draw_distinct_keys(count: usize, rng: &mut GameRng) -> Vec<u64> {
    loop {
        let keys: Vec<u64> = (0..count).map(|_| rng.next_key()).collect();
        let unique: FxHashSet<u64> = keys.iter().copied().collect();
        if unique.len() == count {
            return keys;
        }
    }
}
