//! The rule chromosome.

use crate::data::Item;
use std::collections::BTreeSet;

/// Which half of a rule an operator acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Antecedent,
    Consequent,
}

impl Side {
    /// Picks a side uniformly at random.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Side::Antecedent
        } else {
            Side::Consequent
        }
    }
}

/// An association rule `antecedent => consequent` with its scores.
///
/// `support`, `confidence` and `lift` describe the rule against the
/// transaction database as of the last call to
/// [`evaluate`](super::metrics::evaluate); every operator that changes either
/// side leaves them stale until the rule is evaluated again. `novelty` is
/// assigned when the rule is compared against the archive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule<I: Item> {
    pub antecedent: BTreeSet<I>,
    pub consequent: BTreeSet<I>,

    /// Size of the itemset this rule was split from. Not updated by
    /// crossover or mutation.
    pub level: usize,

    pub support: f64,
    pub confidence: f64,
    pub lift: f64,

    /// Minimum distance to the archive at the time of acceptance (0..=1).
    pub novelty: f64,
}

impl<I: Item> Rule<I> {
    /// Creates an unscored rule.
    pub fn new(antecedent: BTreeSet<I>, consequent: BTreeSet<I>, level: usize) -> Self {
        Self {
            antecedent,
            consequent,
            level,
            support: 0.0,
            confidence: 0.0,
            lift: 0.0,
            novelty: 0.0,
        }
    }

    /// The items on `side`.
    pub fn side(&self, side: Side) -> &BTreeSet<I> {
        match side {
            Side::Antecedent => &self.antecedent,
            Side::Consequent => &self.consequent,
        }
    }

    /// Mutable access to the items on `side`.
    pub fn side_mut(&mut self, side: Side) -> &mut BTreeSet<I> {
        match side {
            Side::Antecedent => &mut self.antecedent,
            Side::Consequent => &mut self.consequent,
        }
    }

    /// All items mentioned by the rule.
    pub fn items(&self) -> BTreeSet<&I> {
        self.antecedent.iter().chain(self.consequent.iter()).collect()
    }

    /// Returns `true` if both sides are non-empty and share no item.
    pub fn is_well_formed(&self) -> bool {
        !self.antecedent.is_empty()
            && !self.consequent.is_empty()
            && self.antecedent.is_disjoint(&self.consequent)
    }
}
