//! Parent selection.
//!
//! Tournament selection on lift: draw `k` distinct rules uniformly at random
//! and keep the one with the highest lift. Ties go to the earliest draw.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Rule;
use crate::data::Item;
use rand::seq::index;
use rand::Rng;

/// Selects a parent index by tournament on lift.
///
/// Draws `min(k, population.len())` rules without replacement (at least one).
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Item, R: Rng>(population: &[Rule<I>], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let draws = index::sample(rng, n, k.clamp(1, n));

    let mut best_idx = draws.index(0);
    for idx in draws.iter().skip(1) {
        if population[idx].lift > population[best_idx].lift {
            best_idx = idx;
        }
    }
    best_idx
}
