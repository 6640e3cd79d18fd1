//! Discovery loop execution.
//!
//! [`DiscoveryRunner`] evolves a population of rules for a fixed generation
//! budget. Each generation:
//!
//! 1. Breeds `ceil(|population| / 2)` (at least one) parent pairs by tournament,
//!    crossover and mutation, then scores both children
//! 2. Discards children whose sides are empty or overlap
//! 3. Keeps children with `confidence >= min_confidence` and
//!    `lift > min_lift`
//! 4. Scores novelty against the archive as it stands at that moment and
//!    archives children reaching `novelty_threshold`; archived children also
//!    join the next population
//! 5. Carries the outgoing rule with the highest novelty into the next
//!    population
//! 6. Reuses the outgoing population if the next one would be empty
//!
//! The archive only ever grows, and archived rules are never modified.

use super::config::DiscoveryConfig;
use super::metrics::evaluate;
use super::novelty::archive_novelty;
use super::operators::{crossover, mutate};
use super::population::initialize_population;
use super::selection::tournament;
use super::types::Rule;
use crate::data::{mine_frequent_itemsets, FrequentItemsets, Item, Transaction};
use crate::error::ConfigError;
use crate::random::rng_from_option;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Offspring bookkeeping over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Children produced and scored.
    pub offspring: usize,

    /// Children discarded for an empty side or shared items.
    pub rejected_malformed: usize,

    /// Children below the confidence or lift threshold.
    pub rejected_threshold: usize,

    /// Children too close to an archived rule.
    pub rejected_novelty: usize,

    /// Children added to the archive.
    pub accepted: usize,
}

/// Result of a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryResult<I: Item> {
    /// Accepted novel rules, in order of acceptance.
    pub archive: Vec<Rule<I>>,

    /// Number of generations executed.
    pub generations: usize,

    /// Generations the run was allowed (`(2^max_k - 2) * itemset_count`,
    /// capped by `max_generations`).
    pub generation_budget: usize,

    /// Size of the initial population.
    pub initial_population: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Archive size at the end of each generation.
    pub archive_history: Vec<usize>,

    pub stats: DiscoveryStats,
}

impl<I: Item> DiscoveryResult<I> {
    /// Returns `true` if no novel rule was found.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

/// Executes the novel rule discovery loop.
///
/// # Usage
///
/// ```
/// use u_novelrule::data::{mine_frequent_itemsets, Transaction};
/// use u_novelrule::discovery::{DiscoveryConfig, DiscoveryRunner};
///
/// let transactions: Vec<Transaction<&str>> = vec![
///     ["tea", "cake"].into(),
///     ["tea", "cake"].into(),
///     ["coffee", "bagel"].into(),
///     ["coffee", "bagel"].into(),
/// ];
/// let config = DiscoveryConfig::default().with_max_k(2).with_seed(42);
/// let itemsets = mine_frequent_itemsets(&transactions, 0.25, config.max_k);
///
/// let result = DiscoveryRunner::run(&itemsets, &transactions, &config).unwrap();
/// assert!(result.archive.iter().all(|r| r.lift > 1.0));
/// ```
pub struct DiscoveryRunner;

impl DiscoveryRunner {
    /// Runs the search over a precomputed itemset table.
    pub fn run<I: Item>(
        itemsets: &FrequentItemsets<I>,
        transactions: &[Transaction<I>],
        config: &DiscoveryConfig,
    ) -> Result<DiscoveryResult<I>, ConfigError> {
        Self::run_with_cancel(itemsets, transactions, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the archive built so far.
    pub fn run_with_cancel<I: Item>(
        itemsets: &FrequentItemsets<I>,
        transactions: &[Transaction<I>],
        config: &DiscoveryConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<DiscoveryResult<I>, ConfigError> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let itemset_count = itemsets.total_count_up_to(config.max_k);
        let budget = config.generation_budget(itemset_count);
        let items = itemsets.items_up_to(config.max_k);

        let mut population = initialize_population(
            itemsets,
            transactions,
            config.max_k,
            config.population_size,
            config.parallel,
            &mut rng,
        );
        let initial_population = population.len();
        info!(
            transactions = transactions.len(),
            itemsets = itemset_count,
            items = items.len(),
            population = initial_population,
            budget,
            "starting rule discovery"
        );

        let mut archive: Vec<Rule<I>> = Vec::new();
        let mut archive_history = Vec::new();
        let mut stats = DiscoveryStats::default();
        let mut cancelled = false;
        let mut generations = 0usize;

        while generations < budget {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if population.is_empty() {
                warn!(generation = generations, "population is empty, stopping");
                break;
            }

            let offspring = breed_generation(
                &population,
                &mut archive,
                transactions,
                &items,
                config,
                &mut stats,
                &mut rng,
            );
            population = next_population(population, offspring);

            generations += 1;
            archive_history.push(archive.len());
            debug!(
                generation = generations,
                archive = archive.len(),
                population = population.len(),
                "generation complete"
            );
        }

        info!(
            generations,
            archive = archive.len(),
            offspring = stats.offspring,
            cancelled,
            "rule discovery finished"
        );

        Ok(DiscoveryResult {
            archive,
            generations,
            generation_budget: budget,
            initial_population,
            cancelled,
            archive_history,
            stats,
        })
    }
}

/// Mines frequent itemsets from `transactions` with `config.min_support` and
/// `config.max_k`, then runs the search on them.
pub fn discover<I: Item>(
    transactions: &[Transaction<I>],
    config: &DiscoveryConfig,
) -> Result<DiscoveryResult<I>, ConfigError> {
    config.validate()?;
    let itemsets = mine_frequent_itemsets(transactions, config.min_support, config.max_k);
    DiscoveryRunner::run(&itemsets, transactions, config)
}

/// Produces one generation of offspring, archiving the novel ones.
///
/// Returns the children that were archived, in acceptance order. Each child
/// is judged against the archive including every rule accepted earlier in
/// the same generation.
fn breed_generation<I: Item, R: Rng>(
    population: &[Rule<I>],
    archive: &mut Vec<Rule<I>>,
    transactions: &[Transaction<I>],
    items: &[I],
    config: &DiscoveryConfig,
    stats: &mut DiscoveryStats,
    rng: &mut R,
) -> Vec<Rule<I>> {
    let mut accepted = Vec::new();
    let pairs = population.len().div_ceil(2).max(1);

    for _ in 0..pairs {
        let p1 = tournament(population, config.tournament_size, rng);
        let p2 = tournament(population, config.tournament_size, rng);

        let (mut c1, mut c2) = crossover(
            &population[p1],
            &population[p2],
            config.crossover_rate,
            rng,
        );
        mutate(&mut c1, items, config.mutation_rate, rng);
        mutate(&mut c2, items, config.mutation_rate, rng);

        for mut child in [c1, c2] {
            evaluate(&mut child, transactions);
            stats.offspring += 1;

            if !child.is_well_formed() {
                stats.rejected_malformed += 1;
                trace!(
                    antecedent = ?child.antecedent,
                    consequent = ?child.consequent,
                    "discarded malformed rule"
                );
                continue;
            }
            if child.confidence < config.min_confidence || child.lift <= config.min_lift {
                stats.rejected_threshold += 1;
                continue;
            }

            child.novelty = archive_novelty(&child, archive);
            if child.novelty >= config.novelty_threshold {
                stats.accepted += 1;
                archive.push(child.clone());
                accepted.push(child);
            } else {
                stats.rejected_novelty += 1;
            }
        }
    }

    accepted
}

/// Assembles the next population from the archived offspring and the elite
/// of the outgoing population, falling back to the outgoing population when
/// nothing survives.
fn next_population<I: Item>(outgoing: Vec<Rule<I>>, mut offspring: Vec<Rule<I>>) -> Vec<Rule<I>> {
    if let Some(best) = elite(&outgoing) {
        offspring.push(outgoing[best].clone());
    }
    if offspring.is_empty() {
        outgoing
    } else {
        offspring
    }
}

/// Index of the rule with the highest recorded novelty (first on ties).
fn elite<I: Item>(population: &[Rule<I>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, rule) in population.iter().enumerate() {
        match best {
            Some(b) if population[b].novelty >= rule.novelty => {}
            _ => best = Some(i),
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
