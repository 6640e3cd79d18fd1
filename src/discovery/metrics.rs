//! Support, confidence and lift.
//!
//! For a rule `A => C` over `n` transactions:
//!
//! - `support = |A ∪ C| / n`
//! - `confidence = |A ∪ C| / |A|` (0 when `A` never occurs)
//! - `lift = confidence / (|C| / n)` (0 when `C` never occurs)
//!
//! where `|X|` counts transactions containing every item of `X`. All three
//! values are rounded to six decimals. Each evaluation is a full scan of the
//! database.

use super::types::Rule;
use crate::data::{Item, Transaction};
use std::collections::BTreeSet;

/// Scores of one rule against a transaction database.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RuleMetrics {
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl RuleMetrics {
    /// Computes the metrics of `antecedent => consequent`.
    pub fn compute<I: Item>(
        antecedent: &BTreeSet<I>,
        consequent: &BTreeSet<I>,
        transactions: &[Transaction<I>],
    ) -> Self {
        let n = transactions.len();
        if n == 0 {
            return Self::default();
        }

        let mut antecedent_count = 0usize;
        let mut consequent_count = 0usize;
        let mut both_count = 0usize;
        for t in transactions {
            let has_a = antecedent.is_subset(t);
            let has_c = consequent.is_subset(t);
            antecedent_count += has_a as usize;
            consequent_count += has_c as usize;
            both_count += (has_a && has_c) as usize;
        }

        let n = n as f64;
        let support = both_count as f64 / n;
        let confidence = if antecedent_count > 0 {
            both_count as f64 / antecedent_count as f64
        } else {
            0.0
        };
        let consequent_support = consequent_count as f64 / n;
        let lift = if consequent_count > 0 {
            confidence / consequent_support
        } else {
            0.0
        };

        Self {
            support: round6(support),
            confidence: round6(confidence),
            lift: round6(lift),
        }
    }
}

/// Recomputes the metrics of `rule` in place.
pub fn evaluate<I: Item>(rule: &mut Rule<I>, transactions: &[Transaction<I>]) {
    let m = RuleMetrics::compute(&rule.antecedent, &rule.consequent, transactions);
    rule.support = m.support;
    rule.confidence = m.confidence;
    rule.lift = m.lift;
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(rows: &[&[&'static str]]) -> Vec<Transaction<&'static str>> {
        rows.iter().map(|r| r.iter().copied().collect()).collect()
    }

    fn rule(a: &[&'static str], c: &[&'static str]) -> Rule<&'static str> {
        Rule::new(a.iter().copied().collect(), c.iter().copied().collect(), 2)
    }

    #[test]
    fn test_hand_computed_metrics() {
        // a in 2, b in 2, both in 1, n = 4
        let transactions = db(&[&["a", "b"], &["a"], &["b"], &["c"]]);
        let mut r = rule(&["a"], &["b"]);
        evaluate(&mut r, &transactions);

        assert!((r.support - 0.25).abs() < 1e-12);
        assert!((r.confidence - 0.5).abs() < 1e-12);
        assert!((r.lift - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_positive_association() {
        let transactions = db(&[&["a", "b"], &["a", "b"], &["c"], &["c"]]);
        let m = RuleMetrics::compute(
            &["a"].into_iter().collect(),
            &["b"].into_iter().collect(),
            &transactions,
        );
        assert!((m.support - 0.5).abs() < 1e-12);
        assert!((m.confidence - 1.0).abs() < 1e-12);
        assert!((m.lift - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_database_is_all_zero() {
        let mut r = rule(&["a"], &["b"]);
        r.support = 9.0;
        evaluate(&mut r, &[]);
        assert_eq!((r.support, r.confidence, r.lift), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_absent_items() {
        let transactions = db(&[&["a"], &["b"]]);
        let mut r = rule(&["x"], &["b"]);
        evaluate(&mut r, &transactions);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.lift, 0.0);

        let mut r = rule(&["a"], &["y"]);
        evaluate(&mut r, &transactions);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.lift, 0.0);
    }

    #[test]
    fn test_rounding_to_six_decimals() {
        // confidence = 1/3
        let transactions = db(&[&["a", "b"], &["a"], &["a"], &["b"], &["c"], &["c"]]);
        let mut r = rule(&["a"], &["b"]);
        evaluate(&mut r, &transactions);
        assert_eq!(r.confidence, 0.333333);
        assert_eq!(r.support, 0.166667);
    }

    #[test]
    fn test_reevaluation_is_idempotent() {
        let transactions = db(&[&["a", "b", "c"], &["a", "c"], &["b"], &["a", "b"]]);
        let mut r = rule(&["a"], &["b", "c"]);
        evaluate(&mut r, &transactions);
        let first = r.clone();
        evaluate(&mut r, &transactions);
        assert_eq!(r, first);
    }
}
