//! Initial population.
//!
//! Every frequent itemset of size 2..=`max_k` is split into all of its
//! antecedent/consequent partitions (`2^q - 2` rules for an itemset of size
//! `q`). Each split is scored, then the pool is sampled down to the target
//! population size. No confidence or lift filtering happens here.

use super::metrics::evaluate;
use super::types::Rule;
use crate::data::{FrequentItemsets, Item, Transaction};
use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;

/// Enumerates and scores every split of every itemset of size `2..=max_k`.
///
/// Splits are produced in ascending antecedent size, then in lexicographic
/// order of the chosen antecedent items.
pub fn candidate_rules<I: Item>(
    itemsets: &FrequentItemsets<I>,
    transactions: &[Transaction<I>],
    max_k: usize,
    parallel: bool,
) -> Vec<Rule<I>> {
    let mut rules = Vec::new();
    for q in 2..=max_k {
        let Some(level) = itemsets.level(q) else {
            continue;
        };
        for itemset in level.keys() {
            let items: Vec<&I> = itemset.iter().collect();
            for r in 1..items.len() {
                for chosen in combinations(items.len(), r) {
                    let antecedent: BTreeSet<I> =
                        chosen.iter().map(|&i| items[i].clone()).collect();
                    let consequent: BTreeSet<I> =
                        itemset.difference(&antecedent).cloned().collect();
                    rules.push(Rule::new(antecedent, consequent, q));
                }
            }
        }
    }

    evaluate_all(&mut rules, transactions, parallel);
    rules
}

/// Builds the initial population: all candidate splits, uniformly sampled
/// without replacement down to `population_size` when there are more.
pub fn initialize_population<I: Item, R: Rng>(
    itemsets: &FrequentItemsets<I>,
    transactions: &[Transaction<I>],
    max_k: usize,
    population_size: usize,
    parallel: bool,
    rng: &mut R,
) -> Vec<Rule<I>> {
    let candidates = candidate_rules(itemsets, transactions, max_k, parallel);
    if candidates.len() <= population_size {
        return candidates;
    }

    let mut slots: Vec<Option<Rule<I>>> = candidates.into_iter().map(Some).collect();
    index::sample(rng, slots.len(), population_size)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_all<I: Item>(rules: &mut [Rule<I>], transactions: &[Transaction<I>], parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        rules
            .par_iter_mut()
            .for_each(|rule| evaluate(rule, transactions));
    } else {
        for rule in rules.iter_mut() {
            evaluate(rule, transactions);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<I: Item>(rules: &mut [Rule<I>], transactions: &[Transaction<I>], _parallel: bool) {
    for rule in rules.iter_mut() {
        evaluate(rule, transactions);
    }
}

/// All `r`-element index combinations of `0..n`, in lexicographic order.
fn combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if r == 0 || r > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..r).collect();
    loop {
        out.push(idx.clone());

        // rightmost position that can still advance
        let Some(i) = (0..r).rev().find(|&i| idx[i] != i + n - r) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..r {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
