//! Genetic operators on rules.
//!
//! # Crossover
//!
//! [`crossover`] recombines one side (antecedent or consequent, chosen
//! uniformly) of two parents with a one-point cut. The other side of each
//! child is copied from its own parent. [`recombine`] holds the cut policy:
//!
//! | parent side lengths | result |
//! |---|---|
//! | either empty | no change |
//! | both 1 | sides swapped |
//! | both > 1 | cut uniformly in `[1, min_len - 1]` |
//! | one 1, other > 1 | cut at 1 |
//!
//! # Mutation
//!
//! [`mutate`] either adds an item to one side or replaces one of its items,
//! drawing from the global item pool minus the items already on that side.
//! When nothing is available the side is left unchanged.
//!
//! Children are independent clones; the sets are never shared.

use super::types::{Rule, Side};
use crate::data::Item;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeSet;

// ============================================================================
// Crossover
// ============================================================================

/// With probability `rate`, recombines a uniformly chosen side of the
/// parents; otherwise returns plain copies.
///
/// Children carry their parents' (now possibly stale) metrics and must be
/// re-evaluated.
pub fn crossover<I: Item, R: Rng>(
    parent1: &Rule<I>,
    parent2: &Rule<I>,
    rate: f64,
    rng: &mut R,
) -> (Rule<I>, Rule<I>) {
    if rng.random::<f64>() < rate {
        let side = Side::random(rng);
        crossover_side(parent1, parent2, side, rng)
    } else {
        (parent1.clone(), parent2.clone())
    }
}

/// Recombines `side` of the parents.
pub fn crossover_side<I: Item, R: Rng>(
    parent1: &Rule<I>,
    parent2: &Rule<I>,
    side: Side,
    rng: &mut R,
) -> (Rule<I>, Rule<I>) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    let a1: Vec<I> = parent1.side(side).iter().cloned().collect();
    let a2: Vec<I> = parent2.side(side).iter().cloned().collect();
    if let Some((s1, s2)) = recombine(&a1, &a2, rng) {
        *child1.side_mut(side) = s1;
        *child2.side_mut(side) = s2;
    }

    (child1, child2)
}

/// One-point recombination of two item lists.
///
/// Returns `None` when either list is empty. Otherwise child 1 takes `a1`
/// before the cut and `a2` from the cut onward, child 2 the mirror image.
pub fn recombine<I: Item, R: Rng>(
    a1: &[I],
    a2: &[I],
    rng: &mut R,
) -> Option<(BTreeSet<I>, BTreeSet<I>)> {
    let (len1, len2) = (a1.len(), a2.len());
    if len1 == 0 || len2 == 0 {
        return None;
    }
    if len1 == 1 && len2 == 1 {
        return Some((a2.iter().cloned().collect(), a1.iter().cloned().collect()));
    }

    let shortest = len1.min(len2);
    let cut = if shortest > 1 {
        rng.random_range(1..shortest)
    } else {
        1
    };
    Some((splice(a1, a2, cut), splice(a2, a1, cut)))
}

fn splice<I: Item>(head: &[I], tail: &[I], cut: usize) -> BTreeSet<I> {
    head[..cut].iter().chain(&tail[cut..]).cloned().collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// The change applied by [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Add,
    Replace,
}

/// With probability `rate`, adds or replaces one item on a uniformly chosen
/// side of `rule`, drawing from `items`.
///
/// An empty side always gets [`MutationKind::Add`]. Returns the applied kind,
/// or `None` if nothing changed.
pub fn mutate<I: Item, R: Rng>(
    rule: &mut Rule<I>,
    items: &[I],
    rate: f64,
    rng: &mut R,
) -> Option<MutationKind> {
    if rng.random::<f64>() >= rate {
        return None;
    }
    let side = Side::random(rng);
    mutate_side(rule, side, items, rng)
}

/// Adds or replaces one item on `side`.
pub fn mutate_side<I: Item, R: Rng>(
    rule: &mut Rule<I>,
    side: Side,
    items: &[I],
    rng: &mut R,
) -> Option<MutationKind> {
    if items.is_empty() {
        return None;
    }

    let target = rule.side_mut(side);
    let kind = if target.is_empty() || rng.random_bool(0.5) {
        MutationKind::Add
    } else {
        MutationKind::Replace
    };

    match kind {
        MutationKind::Add => {
            let available: Vec<&I> = items.iter().filter(|i| !target.contains(*i)).collect();
            let added = available.choose(rng)?;
            target.insert((*added).clone());
        }
        MutationKind::Replace => {
            let current: Vec<I> = target.iter().cloned().collect();
            let removed = current.choose(rng)?;
            let available: Vec<&I> = items.iter().filter(|i| !target.contains(*i)).collect();
            let added = available.choose(rng)?;
            target.remove(removed);
            target.insert((*added).clone());
        }
    }
    Some(kind)
}

// ============================================================================
// Tests
// ============================================================================
