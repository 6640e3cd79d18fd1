//! Evolutionary discovery of novel association rules.
//!
//! Rules `A => C` are evolved from splits of frequent itemsets. Offspring are
//! kept only when they are accurate (confidence and lift thresholds) and
//! novel: sufficiently different, by item overlap, from every rule already in
//! the archive. The archive is both the output and the reference set for
//! later novelty judgements.
//!
//! # Key Types
//!
//! - [`Rule`]: Antecedent/consequent pair with its scores
//! - [`DiscoveryConfig`]: Thresholds, operator rates, budget cap, seed
//! - [`DiscoveryRunner`]: Executes the generational loop
//! - [`DiscoveryResult`]: Archive and run statistics
//! - [`RuleTable`]: Ranked rendering of the archive
//!
//! # Submodules
//!
//! - [`metrics`]: Support, confidence, lift
//! - [`novelty`]: Pairwise and archive novelty
//! - [`population`]: Initial population from itemset splits
//! - [`selection`]: Tournament selection on lift
//! - [`operators`]: Side-wise one-point crossover, add/replace mutation
//! - [`report`]: Result table
//!
//! # References
//!
//! - Agrawal, Imieliński & Swami (1993), "Mining Association Rules between
//!   Sets of Items in Large Databases"
//! - Lehman & Stanley (2011), "Abandoning Objectives: Evolution Through the
//!   Search for Novelty Alone"

mod config;
pub mod metrics;
pub mod novelty;
pub mod operators;
pub mod population;
pub mod report;
mod runner;
pub mod selection;
mod types;

pub use config::DiscoveryConfig;
pub use report::{RuleRow, RuleTable};
pub use runner::{discover, DiscoveryResult, DiscoveryRunner, DiscoveryStats};
pub use types::{Rule, Side};
