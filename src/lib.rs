//! Evolutionary discovery of novel association rules.
//!
//! Classical association-rule mining enumerates every rule above support and
//! confidence thresholds, which buries the interesting ones under
//! near-duplicates. This crate instead runs a genetic search over
//! antecedent/consequent splits of frequent itemsets and keeps only rules
//! that are both strong (confidence, lift) and novel with respect to the
//! rules already found.
//!
//! - **Data** ([`data`]): transactions, catalogue join, Apriori itemset
//!   mining.
//! - **Discovery** ([`discovery`]): metrics, novelty, genetic operators and
//!   the generational loop with its growing archive.
//!
//! # Example
//!
//! ```
//! use u_novelrule::data::Transaction;
//! use u_novelrule::discovery::{discover, DiscoveryConfig, RuleTable};
//!
//! let transactions: Vec<Transaction<&str>> = vec![
//!     ["bread", "butter"].into(),
//!     ["bread", "butter", "jam"].into(),
//!     ["coffee", "croissant"].into(),
//!     ["coffee", "croissant"].into(),
//! ];
//! let config = DiscoveryConfig::default()
//!     .with_min_support(0.25)
//!     .with_max_k(3)
//!     .with_seed(7);
//!
//! let result = discover(&transactions, &config).unwrap();
//! let table = RuleTable::from_archive(&result.archive);
//! println!("{table}");
//! ```
//!
//! The search is randomized; fix [`DiscoveryConfig::seed`](discovery::DiscoveryConfig::seed)
//! for reproducible runs.

pub mod data;
pub mod discovery;
pub mod error;
pub mod random;

pub use error::{ConfigError, DataError};
