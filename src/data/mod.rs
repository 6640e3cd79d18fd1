//! Transaction data and frequent itemsets.
//!
//! The discovery engine consumes two read-only inputs: a transaction database
//! and a table of frequent itemsets mined from it. This module defines both,
//! builds transactions from raw order lines, and provides a level-wise miner.
//!
//! # Key Types
//!
//! - [`Item`]: Bound satisfied by any ordered, cloneable label
//! - [`Transaction`]: One basket of items
//! - [`FrequentItemsets`]: Itemsets grouped by size with support counts
//!
//! # Submodules
//!
//! - [`etl`]: Catalogue join and per-order grouping
//! - [`mining`]: Apriori frequent itemset miner

pub mod etl;
pub mod mining;
mod types;

pub use mining::mine_frequent_itemsets;
pub use types::{FrequentItemsets, Item, Transaction};
