//! Discovery configuration.
//!
//! [`DiscoveryConfig`] holds every tunable of the search, from the support
//! threshold used for itemset mining to the genetic operator rates.

use crate::error::ConfigError;

/// Configuration for novel rule discovery.
///
/// # Defaults
///
/// ```
/// use u_novelrule::discovery::DiscoveryConfig;
///
/// let config = DiscoveryConfig::default();
/// assert_eq!(config.max_k, 4);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_novelrule::discovery::DiscoveryConfig;
///
/// let config = DiscoveryConfig::default()
///     .with_max_k(3)
///     .with_min_confidence(0.4)
///     .with_novelty_threshold(0.6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Minimum support fraction for frequent itemset mining (0, 1].
    pub min_support: f64,

    /// Largest itemset size mined and split into rules. At least 2.
    ///
    /// Also scales the generation budget: `(2^max_k - 2) * itemset_count`.
    pub max_k: usize,

    /// Upper bound on the initial population. When more candidate splits
    /// exist, this many are sampled uniformly.
    pub population_size: usize,

    /// Offspring need at least this confidence to be considered.
    pub min_confidence: f64,

    /// Offspring need a lift strictly above this value to be considered.
    pub min_lift: f64,

    /// Archive novelty an offspring must reach (inclusive) to be archived.
    pub novelty_threshold: f64,

    /// Probability of recombining a parent pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of rules drawn per tournament (capped at population size).
    pub tournament_size: usize,

    /// Optional cap on the computed generation budget.
    ///
    /// `None` runs the full budget (the default).
    pub max_generations: Option<usize>,

    /// Whether to score initial candidates in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            max_k: 4,
            population_size: 100,
            min_confidence: 0.2,
            min_lift: 1.0,
            novelty_threshold: 0.5,
            crossover_rate: 0.9,
            mutation_rate: 0.9,
            tournament_size: 3,
            max_generations: None,
            parallel: false,
            seed: None,
        }
    }
}

impl DiscoveryConfig {
    /// Sets the minimum support fraction for mining.
    pub fn with_min_support(mut self, support: f64) -> Self {
        self.min_support = support;
        self
    }

    /// Sets the maximum itemset size.
    pub fn with_max_k(mut self, k: usize) -> Self {
        self.max_k = k;
        self
    }

    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the minimum confidence.
    pub fn with_min_confidence(mut self, confidence: f64) -> Self {
        self.min_confidence = confidence;
        self
    }

    /// Sets the minimum (exclusive) lift.
    pub fn with_min_lift(mut self, lift: f64) -> Self {
        self.min_lift = lift;
        self
    }

    /// Sets the novelty acceptance threshold.
    pub fn with_novelty_threshold(mut self, threshold: f64) -> Self {
        self.novelty_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Enables or disables parallel scoring of initial candidates.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(ConfigError::new("min_support", "must be in (0, 1]"));
        }
        if self.max_k < 2 {
            return Err(ConfigError::new("max_k", "must be at least 2"));
        }
        if self.population_size == 0 {
            return Err(ConfigError::new("population_size", "must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::new("tournament_size", "must be at least 1"));
        }
        if !self.min_confidence.is_finite() {
            return Err(ConfigError::new("min_confidence", "must be finite"));
        }
        if !self.min_lift.is_finite() {
            return Err(ConfigError::new("min_lift", "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.novelty_threshold) {
            return Err(ConfigError::new("novelty_threshold", "must be in [0, 1]"));
        }
        for (field, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::new(field, "must be in [0, 1]"));
            }
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::new(
                "max_generations",
                "must be positive or None",
            ));
        }
        Ok(())
    }

    /// Generation budget for a table holding `itemset_count` itemsets:
    /// `(2^max_k - 2) * itemset_count`, capped by `max_generations`.
    pub fn generation_budget(&self, itemset_count: usize) -> usize {
        let exponent = u32::try_from(self.max_k).unwrap_or(u32::MAX);
        let budget = 2usize
            .saturating_pow(exponent)
            .saturating_sub(2)
            .saturating_mul(itemset_count);
        match self.max_generations {
            Some(cap) => budget.min(cap),
            None => budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiscoveryConfig::default();
        assert!((config.min_support - 0.01).abs() < 1e-12);
        assert_eq!(config.max_k, 4);
        assert_eq!(config.population_size, 100);
        assert!((config.min_confidence - 0.2).abs() < 1e-12);
        assert!((config.min_lift - 1.0).abs() < 1e-12);
        assert!((config.novelty_threshold - 0.5).abs() < 1e-12);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!((config.mutation_rate - 0.9).abs() < 1e-12);
        assert_eq!(config.tournament_size, 3);
        assert!(config.max_generations.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiscoveryConfig::default()
            .with_min_support(0.05)
            .with_max_k(3)
            .with_population_size(20)
            .with_min_confidence(0.5)
            .with_min_lift(1.2)
            .with_novelty_threshold(0.7)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.3)
            .with_tournament_size(2)
            .with_max_generations(10)
            .with_parallel(true)
            .with_seed(42);

        assert!((config.min_support - 0.05).abs() < 1e-12);
        assert_eq!(config.max_k, 3);
        assert_eq!(config.population_size, 20);
        assert!((config.min_confidence - 0.5).abs() < 1e-12);
        assert!((config.min_lift - 1.2).abs() < 1e-12);
        assert!((config.novelty_threshold - 0.7).abs() < 1e-12);
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert!((config.mutation_rate - 0.3).abs() < 1e-12);
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.max_generations, Some(10));
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = DiscoveryConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0)
            .with_novelty_threshold(1.5);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.mutation_rate, 1.0);
        assert_eq!(config.novelty_threshold, 1.0);
    }

    #[test]
    fn test_validate_rejects() {
        let err = DiscoveryConfig::default().with_max_k(1).validate().unwrap_err();
        assert_eq!(err.field, "max_k");

        let err = DiscoveryConfig::default()
            .with_min_support(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "min_support");

        let err = DiscoveryConfig::default()
            .with_population_size(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "population_size");

        let err = DiscoveryConfig::default()
            .with_tournament_size(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "tournament_size");

        let err = DiscoveryConfig::default()
            .with_min_lift(f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "min_lift");

        let err = DiscoveryConfig::default()
            .with_max_generations(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "max_generations");
    }

    #[test]
    fn test_generation_budget() {
        let config = DiscoveryConfig::default();
        // (16 - 2) * 5
        assert_eq!(config.generation_budget(5), 70);
        assert_eq!(config.generation_budget(0), 0);

        let config = DiscoveryConfig::default().with_max_k(2);
        assert_eq!(config.generation_budget(3), 6);

        let config = DiscoveryConfig::default().with_max_generations(10);
        assert_eq!(config.generation_budget(5), 10);
        assert_eq!(config.generation_budget(0), 0);
    }

    #[test]
    fn test_generation_budget_saturates() {
        let config = DiscoveryConfig::default().with_max_k(200);
        assert_eq!(config.generation_budget(3), usize::MAX);
    }
}
