//! Ranked, human-readable view of the archive.

use super::types::Rule;
use crate::data::Item;
use std::fmt;
use tracing::info;

/// Message shown for an empty archive.
pub const NO_RULES_MESSAGE: &str = "no novel rules found";

/// One rendered rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleRow {
    /// Antecedent items, sorted and comma-joined.
    pub antecedent: String,
    /// Consequent items, sorted and comma-joined.
    pub consequent: String,
    pub confidence: f64,
    pub lift: f64,
    /// Novelty rounded to three decimals.
    pub novelty: f64,
}

impl RuleRow {
    /// Renders a single rule.
    pub fn from_rule<I: Item + fmt::Display>(rule: &Rule<I>) -> Self {
        Self {
            antecedent: join(rule.antecedent.iter()),
            consequent: join(rule.consequent.iter()),
            confidence: rule.confidence,
            lift: rule.lift,
            novelty: (rule.novelty * 1e3).round() / 1e3,
        }
    }
}

/// Archived rules sorted by descending lift.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTable {
    pub rows: Vec<RuleRow>,
}

impl RuleTable {
    /// Builds the table from an archive. An empty archive yields an empty
    /// table that displays as [`NO_RULES_MESSAGE`].
    pub fn from_archive<I: Item + fmt::Display>(archive: &[Rule<I>]) -> Self {
        if archive.is_empty() {
            info!("{NO_RULES_MESSAGE}");
            return Self::default();
        }

        let mut rows: Vec<RuleRow> = archive.iter().map(RuleRow::from_rule).collect();
        rows.sort_by(|a, b| b.lift.total_cmp(&a.lift));
        Self { rows }
    }

    /// Returns `true` if there are no rules to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{NO_RULES_MESSAGE}");
        }

        let a_width = self
            .rows
            .iter()
            .map(|r| r.antecedent.chars().count())
            .chain(std::iter::once("antecedent".len()))
            .max()
            .unwrap_or(0);
        let c_width = self
            .rows
            .iter()
            .map(|r| r.consequent.chars().count())
            .chain(std::iter::once("consequent".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<a_width$}  {:<c_width$}  {:>10}  {:>10}  {:>7}",
            "antecedent", "consequent", "confidence", "lift", "novelty"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<a_width$}  {:<c_width$}  {:>10.6}  {:>10.6}  {:>7.3}",
                row.antecedent, row.consequent, row.confidence, row.lift, row.novelty
            )?;
        }
        Ok(())
    }
}

fn join<'a, I: fmt::Display + 'a>(items: impl Iterator<Item = &'a I>) -> String {
    let mut names: Vec<String> = items.map(ToString::to_string).collect();
    names.sort();
    names.join(", ")
}
