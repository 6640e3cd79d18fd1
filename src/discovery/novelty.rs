//! Rule novelty.
//!
//! Two rules are compared by the items they mention, regardless of which side
//! an item sits on. With `g1`, `g2` the item unions and `k = |g1 ∩ g2|`:
//!
//! ```text
//! novelty = (|g1| + |g2| - 2k) / (|g1| + |g2|)
//! ```
//!
//! i.e. one minus the Dice coefficient. Identical unions score 0, disjoint
//! unions score 1.

use super::types::Rule;
use crate::data::Item;

/// Pairwise novelty of two rules, in `[0, 1]`.
///
/// Two rules with no items at all score 0.
pub fn novelty<I: Item>(a: &Rule<I>, b: &Rule<I>) -> f64 {
    let g1 = a.items();
    let g2 = b.items();
    let denom = g1.len() + g2.len();
    if denom == 0 {
        return 0.0;
    }
    let k = g1.intersection(&g2).count();
    ((denom - 2 * k) as f64 / denom as f64).clamp(0.0, 1.0)
}

/// Novelty of `rule` against an archive: the distance to its closest match.
///
/// An empty archive gives 1.0.
pub fn archive_novelty<I: Item>(rule: &Rule<I>, archive: &[Rule<I>]) -> f64 {
    archive
        .iter()
        .map(|old| novelty(rule, old))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
        .unwrap_or(1.0)
}
