//! Command-line front end: load sales lines and a catalogue, mine frequent
//! itemsets and print the novel rules found.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_novelrule::data::etl::{build_transactions, load_catalogue, load_line_items};
use u_novelrule::data::mine_frequent_itemsets;
use u_novelrule::discovery::{DiscoveryConfig, DiscoveryRunner, RuleTable};
use u_novelrule::DataError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "novelrule", version, about = "Discover novel association rules")]
struct Cli {
    /// JSON array of {"order", "code"} sales lines
    #[arg(long, default_value = "data/lines.json")]
    transactions: PathBuf,

    /// JSON array of {"code", "name"} catalogue entries
    #[arg(long, default_value = "data/catalogue.json")]
    catalogue: PathBuf,

    /// Minimum support fraction for itemset mining
    #[arg(long, default_value_t = 0.01)]
    min_support: f64,

    /// Maximum itemset size
    #[arg(long, default_value_t = 4)]
    max_k: usize,

    /// Initial population size
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    #[arg(long, default_value_t = 0.2)]
    min_confidence: f64,

    /// Lift must be strictly greater than this
    #[arg(long, default_value_t = 1.0)]
    min_lift: f64,

    #[arg(long, default_value_t = 0.5)]
    novelty_threshold: f64,

    #[arg(long, default_value_t = 0.9)]
    crossover_rate: f64,

    #[arg(long, default_value_t = 0.9)]
    mutation_rate: f64,

    /// Stop after this many generations even if the budget allows more
    #[arg(long)]
    max_generations: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Log per-generation progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> DiscoveryConfig {
        let mut config = DiscoveryConfig::default()
            .with_min_support(self.min_support)
            .with_max_k(self.max_k)
            .with_population_size(self.population_size)
            .with_min_confidence(self.min_confidence)
            .with_min_lift(self.min_lift)
            .with_novelty_threshold(self.novelty_threshold)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_parallel(true);
        config.max_generations = self.max_generations;
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    config.validate().context("invalid parameters")?;

    let lines = load_line_items(&cli.transactions)?;
    let catalogue = load_catalogue(&cli.catalogue)?;
    let transactions = build_transactions(&lines, &catalogue);
    if transactions.is_empty() {
        return Err(DataError::NoTransactions.into());
    }

    let itemsets = mine_frequent_itemsets(&transactions, config.min_support, config.max_k);
    for (k, sets) in itemsets.levels() {
        info!(k, count = sets.len(), "frequent itemsets");
    }

    let result = DiscoveryRunner::run(&itemsets, &transactions, &config)?;
    let table = RuleTable::from_archive(&result.archive);

    match cli.format {
        Format::Table => print!("{table}"),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&table).context("failed to encode rules")?
        ),
    }
    Ok(())
}
