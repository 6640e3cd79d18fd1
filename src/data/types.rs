//! Transaction database and frequent itemset table.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// An opaque item label.
///
/// Items are compared for equality and ordered so that every set of items
/// iterates in a stable order, which keeps seeded runs reproducible.
/// Implemented for every type meeting the bounds (`String`, `&str`, `u32`, ...).
pub trait Item: Clone + Ord + Debug + Send + Sync {}

impl<T: Clone + Ord + Debug + Send + Sync> Item for T {}

/// One basket or order: the set of items bought together.
pub type Transaction<I> = BTreeSet<I>;

/// Frequent itemsets grouped by size, each with its support count.
///
/// Produced by a frequent-pattern miner (see [`mine_frequent_itemsets`]) and
/// read-only to the discovery engine.
///
/// [`mine_frequent_itemsets`]: crate::data::mine_frequent_itemsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets<I: Item> {
    levels: BTreeMap<usize, BTreeMap<BTreeSet<I>, usize>>,
}

impl<I: Item> Default for FrequentItemsets<I> {
    fn default() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }
}

impl<I: Item> FrequentItemsets<I> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `itemset` with its support `count`, filed under its size.
    ///
    /// Empty itemsets are ignored.
    pub fn insert(&mut self, itemset: BTreeSet<I>, count: usize) {
        if itemset.is_empty() {
            return;
        }
        self.levels
            .entry(itemset.len())
            .or_default()
            .insert(itemset, count);
    }

    /// Itemsets of exactly size `k`, if any were recorded.
    pub fn level(&self, k: usize) -> Option<&BTreeMap<BTreeSet<I>, usize>> {
        self.levels.get(&k)
    }

    /// Iterates `(size, itemsets)` in ascending size order.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &BTreeMap<BTreeSet<I>, usize>)> {
        self.levels.iter().map(|(&k, sets)| (k, sets))
    }

    /// Support count of `itemset`, if it is frequent.
    pub fn count(&self, itemset: &BTreeSet<I>) -> Option<usize> {
        self.levels.get(&itemset.len())?.get(itemset).copied()
    }

    /// Total number of itemsets across all sizes.
    pub fn total_count(&self) -> usize {
        self.levels.values().map(BTreeMap::len).sum()
    }

    /// Number of itemsets of size at most `max_k`.
    pub fn total_count_up_to(&self, max_k: usize) -> usize {
        self.levels.range(..=max_k).map(|(_, sets)| sets.len()).sum()
    }

    /// Returns `true` if no itemsets were recorded.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Every distinct item appearing in any itemset, sorted.
    pub fn items(&self) -> Vec<I> {
        self.items_up_to(usize::MAX)
    }

    /// Distinct items appearing in itemsets of size at most `max_k`, sorted.
    pub fn items_up_to(&self, max_k: usize) -> Vec<I> {
        let all: BTreeSet<&I> = self
            .levels
            .range(..=max_k)
            .flat_map(|(_, sets)| sets.keys())
            .flatten()
            .collect();
        all.into_iter().cloned().collect()
    }
}

impl<I: Item> FromIterator<(BTreeSet<I>, usize)> for FrequentItemsets<I> {
    fn from_iter<T: IntoIterator<Item = (BTreeSet<I>, usize)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (itemset, count) in iter {
            table.insert(itemset, count);
        }
        table
    }
}
