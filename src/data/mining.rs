//! Level-wise frequent itemset mining (Apriori).
//!
//! Produces the [`FrequentItemsets`] table the discovery engine starts from.
//! An itemset is frequent when the fraction of transactions containing it is
//! at least `min_support`.
//!
//! # Algorithm (Agrawal & Srikant, 1994)
//!
//! 1. Count single items and keep the frequent ones
//! 2. Join frequent k-itemsets sharing their first k-1 items into
//!    (k+1)-candidates
//! 3. Drop candidates with any infrequent k-subset, count the rest
//! 4. Repeat until no candidates remain or `max_k` is reached
//!
//! # References
//!
//! - Agrawal & Srikant (1994), "Fast Algorithms for Mining Association Rules"

use super::types::{FrequentItemsets, Item, Transaction};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Mines all itemsets of size `1..=max_k` whose support is at least
/// `min_support` (a fraction of the transaction count).
///
/// An empty database yields an empty table.
pub fn mine_frequent_itemsets<I: Item>(
    transactions: &[Transaction<I>],
    min_support: f64,
    max_k: usize,
) -> FrequentItemsets<I> {
    let mut table = FrequentItemsets::new();
    let n = transactions.len();
    if n == 0 || max_k == 0 {
        return table;
    }

    let is_frequent = |count: usize| count > 0 && count as f64 / n as f64 >= min_support;

    let mut singles: BTreeMap<I, usize> = BTreeMap::new();
    for t in transactions {
        for item in t {
            *singles.entry(item.clone()).or_insert(0) += 1;
        }
    }

    let mut current: Vec<Vec<I>> = Vec::new();
    for (item, count) in singles {
        if is_frequent(count) {
            table.insert(BTreeSet::from([item.clone()]), count);
            current.push(vec![item]);
        }
    }
    debug!(k = 1, frequent = current.len(), "mined itemset level");

    let mut k = 1;
    while k < max_k && current.len() > 1 {
        let candidates = {
            let known: BTreeSet<&[I]> = current.iter().map(Vec::as_slice).collect();
            join_candidates(&current, &known)
        };

        let mut next = Vec::new();
        for candidate in candidates {
            let count = transactions
                .iter()
                .filter(|t| candidate.iter().all(|item| t.contains(item)))
                .count();
            if is_frequent(count) {
                table.insert(candidate.iter().cloned().collect(), count);
                next.push(candidate);
            }
        }

        k += 1;
        debug!(k, frequent = next.len(), "mined itemset level");
        current = next;
    }

    table
}

/// Joins sorted k-itemsets sharing a (k-1)-prefix and prunes candidates with
/// an infrequent k-subset.
fn join_candidates<I: Item>(current: &[Vec<I>], known: &BTreeSet<&[I]>) -> Vec<Vec<I>> {
    let mut candidates = Vec::new();
    for (i, a) in current.iter().enumerate() {
        for b in &current[i + 1..] {
            let k = a.len();
            if a[..k - 1] != b[..k - 1] {
                continue;
            }
            let mut candidate = a.clone();
            candidate.push(b[k - 1].clone());
            candidate.sort();

            let all_subsets_frequent = (0..candidate.len()).all(|skip| {
                let subset: Vec<I> = candidate
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != skip)
                    .map(|(_, item)| item.clone())
                    .collect();
                known.contains(subset.as_slice())
            });
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(rows: &[&[&'static str]]) -> Vec<Transaction<&'static str>> {
        rows.iter().map(|r| r.iter().copied().collect()).collect()
    }

    fn set(items: &[&'static str]) -> BTreeSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_counts_match_transactions() {
        let transactions = db(&[
            &["bread", "milk"],
            &["bread", "butter", "milk"],
            &["butter", "milk"],
            &["bread", "butter"],
        ]);
        let table = mine_frequent_itemsets(&transactions, 0.5, 3);

        assert_eq!(table.count(&set(&["bread"])), Some(3));
        assert_eq!(table.count(&set(&["milk"])), Some(3));
        assert_eq!(table.count(&set(&["bread", "milk"])), Some(2));
        assert_eq!(table.count(&set(&["butter", "milk"])), Some(2));
        // 1/4 < 0.5
        assert_eq!(table.count(&set(&["bread", "butter", "milk"])), None);
    }

    #[test]
    fn test_respects_max_k() {
        let transactions = db(&[&["a", "b", "c"], &["a", "b", "c"]]);
        let table = mine_frequent_itemsets(&transactions, 0.5, 2);
        assert!(table.level(2).is_some());
        assert!(table.level(3).is_none());

        let table = mine_frequent_itemsets(&transactions, 0.5, 3);
        assert_eq!(table.count(&set(&["a", "b", "c"])), Some(2));
    }

    #[test]
    fn test_empty_database() {
        let transactions: Vec<Transaction<&str>> = Vec::new();
        assert!(mine_frequent_itemsets(&transactions, 0.01, 4).is_empty());
    }

    #[test]
    fn test_support_threshold_is_inclusive() {
        let transactions = db(&[&["a"], &["b"], &["a", "b"], &["c"]]);
        let table = mine_frequent_itemsets(&transactions, 0.25, 2);
        assert_eq!(table.count(&set(&["c"])), Some(1));
        assert_eq!(table.count(&set(&["a", "b"])), Some(1));
    }
}
