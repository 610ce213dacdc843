//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of a single trial; [`BatchConfig`]
//! repeats a trial configuration over several independent seeds.

use crate::error::{GaError, Result};

/// Configuration for one GA trial.
///
/// # Defaults
///
/// ```
/// use bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    ///
    /// Reproduction yields children in pairs, so this must be even.
    pub population_size: usize,

    /// Number of generations evolved after the initial population.
    ///
    /// The run always completes all of them; there is no early exit.
    pub generations: usize,

    /// Probability that a selected pair is recombined (0.0–1.0).
    ///
    /// Otherwise the children start as copies of their parents.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every child bit (0.0–1.0).
    pub mutation_rate: f64,

    /// Upper bound on rejection-sampling attempts per entity during
    /// initialization.
    pub max_init_attempts: usize,

    /// Whether to record the best individual of every generation.
    pub track_best: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which is still recorded in the statistics.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            crossover_rate: 0.7,
            mutation_rate: 0.001,
            max_init_attempts: 100_000,
            track_best: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the rejection-sampling budget.
    pub fn with_max_init_attempts(mut self, attempts: usize) -> Self {
        self.max_init_attempts = attempts;
        self
    }

    /// Enables or disables best-of-generation tracking.
    pub fn with_track_best(mut self, track: bool) -> Self {
        self.track_best = track;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid("population_size must be even"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be in [0, 1]"));
        }
        if self.max_init_attempts == 0 {
            return Err(invalid("max_init_attempts must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration for a batch of independent trials.
///
/// ```
/// use bitga::ga::{BatchConfig, GaConfig};
///
/// let batch = BatchConfig::new(GaConfig::default().with_generations(10))
///     .with_trials(5)
///     .with_base_seed(1000);
/// assert_eq!(batch.trial_seed(2), Some(1002));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Per-trial configuration. Its `seed` is ignored in favour of
    /// [`base_seed`](Self::base_seed).
    pub trial: GaConfig,

    /// Number of independent trials.
    pub trials: usize,

    /// Seed of trial 0; trial `i` uses `base_seed + i`.
    ///
    /// `None` gives every trial a fresh seed.
    pub base_seed: Option<u64>,

    /// Run trials on the rayon thread pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Results are identical either way because trials share no state.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(GaConfig::default())
    }
}

impl BatchConfig {
    pub fn new(trial: GaConfig) -> Self {
        Self {
            trial,
            trials: 30,
            base_seed: None,
            parallel: false,
        }
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Seed for trial `index`, if a base seed is configured.
    pub fn trial_seed(&self, index: usize) -> Option<u64> {
        self.base_seed.map(|base| base.wrapping_add(index as u64))
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(invalid("trials must be at least 1"));
        }
        self.trial.validate()
    }
}

fn invalid(msg: &str) -> GaError {
    GaError::InvalidConfig(msg.into())
}
