//! GA generation loop.
//!
//! A [`Trial`] walks through `Initialized(0) → Evolving(1..N) → Terminated(N)`:
//! it is created with an evaluated initial population, advanced one
//! generation at a time by [`Trial::step`], and consumed by
//! [`Trial::finish`]. [`GaRunner`] drives whole trials and batches of them.

use super::config::{BatchConfig, GaConfig};
use super::operators::Reproduction;
use super::selection::CumulativeDistribution;
use super::stats::{GenerationStats, TrialStats};
use super::types::{BinaryProblem, Individual};
use crate::error::{GaError, Result};
use crate::random::{create_rng, fresh_seed, GaRng};
use crate::report::average_trials;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Where a trial is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// Initial population evaluated; no generation evolved yet.
    Initialized,
    /// At least one generation evolved, more remain.
    Evolving,
    /// All configured generations evolved.
    Terminated,
}

/// Result of one complete trial.
#[derive(Debug, Clone)]
pub struct TrialResult {
    /// Seed the trial's generator was created from.
    pub seed: u64,

    /// Fittest individual seen in any generation.
    pub best: Individual,

    /// Number of generations evolved after initialization.
    pub generations: usize,

    /// One statistics snapshot per generation, index 0 being the initial
    /// population.
    pub stats: TrialStats,

    /// The population of the final generation.
    pub population: Vec<Individual>,
}

/// Result of a batch of independent trials.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Individual trial results, in trial order.
    pub trials: Vec<TrialResult>,

    /// Per-generation statistics averaged across all trials.
    pub summary: Vec<GenerationStats>,
}

impl BatchResult {
    /// The fittest individual across every trial.
    pub fn best(&self) -> Option<&Individual> {
        self.trials
            .iter()
            .map(|t| &t.best)
            .fold(None, |acc: Option<&Individual>, ind| match acc {
                Some(b) if b.fitness >= ind.fitness => Some(b),
                _ => Some(ind),
            })
    }
}

/// One seeded, self-contained evolutionary run.
///
/// Owns its generator, population and statistics; nothing is shared with
/// other trials.
pub struct Trial<'p, P: BinaryProblem> {
    problem: &'p P,
    config: GaConfig,
    reproduction: Reproduction,
    rng: GaRng,
    generation: usize,
    population: Vec<Individual>,
    best: Individual,
    stats: TrialStats,
}

impl<'p, P: BinaryProblem> Trial<'p, P> {
    /// Creates and evaluates the initial population.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] for an invalid configuration or a
    /// problem whose chromosomes do not match its declared width, and
    /// propagates [`GaError::ConstraintUnsatisfiable`] from initialization.
    pub fn initialize(problem: &'p P, config: &GaConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);
        info!(
            problem = problem.name(),
            seed,
            population = config.population_size,
            generations = config.generations,
            "starting trial"
        );

        let width = problem.chromosome_width();
        let mut population = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let chromosome = problem.create_chromosome(&mut rng, config.max_init_attempts)?;
            if chromosome.len() != width {
                return Err(GaError::InvalidConfig(format!(
                    "{} produced a {}-bit chromosome, expected {width}",
                    problem.name(),
                    chromosome.len()
                )));
            }
            population.push(Individual::evaluated(problem, chromosome, &mut rng));
        }

        let mut stats = TrialStats::new(seed, config.generations + 1);
        let initial = GenerationStats::from_population(0, &population, config.track_best);
        let best = fittest(&population).clone();
        log_generation(&initial);
        stats.record(initial);

        Ok(Self {
            problem,
            reproduction: Reproduction::new(config.crossover_rate, config.mutation_rate),
            config: config.clone(),
            rng,
            generation: 0,
            population,
            best,
            stats,
        })
    }

    pub fn phase(&self) -> TrialPhase {
        if self.generation >= self.config.generations {
            TrialPhase::Terminated
        } else if self.generation == 0 {
            TrialPhase::Initialized
        } else {
            TrialPhase::Evolving
        }
    }

    /// Index of the current generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn stats(&self) -> &TrialStats {
        &self.stats
    }

    pub fn seed(&self) -> u64 {
        self.stats.seed
    }

    /// Evolves one generation.
    ///
    /// Builds the CDF once, then fills the next generation two children at
    /// a time: select a pair, reproduce, evaluate. The new generation fully
    /// replaces the old one. Returns `false` without doing anything once
    /// the trial has terminated.
    pub fn step(&mut self) -> bool {
        if self.phase() == TrialPhase::Terminated {
            return false;
        }

        let cdf = CumulativeDistribution::from_population(&self.population);
        let mut next_gen = Vec::with_capacity(self.config.population_size);
        while next_gen.len() < self.config.population_size {
            let (a, b) = cdf.select_pair(&self.population, &mut self.rng);
            let (child_a, child_b) =
                self.reproduction
                    .reproduce(&a.chromosome, &b.chromosome, &mut self.rng);
            next_gen.push(Individual::evaluated(self.problem, child_a, &mut self.rng));
            next_gen.push(Individual::evaluated(self.problem, child_b, &mut self.rng));
        }

        self.population = next_gen;
        self.generation += 1;

        let gen_best = fittest(&self.population);
        if gen_best.fitness > self.best.fitness {
            self.best = gen_best.clone();
        }
        let snapshot = GenerationStats::from_population(
            self.generation,
            &self.population,
            self.config.track_best,
        );
        log_generation(&snapshot);
        self.stats.record(snapshot);

        self.problem.on_generation(self.generation, &self.population);
        true
    }

    /// Consumes the trial and returns its result.
    pub fn finish(self) -> TrialResult {
        info!(
            problem = self.problem.name(),
            seed = self.stats.seed,
            generations = self.generation,
            best_objective = self.best.objective,
            best_fitness = self.best.fitness,
            "trial finished"
        );
        TrialResult {
            seed: self.stats.seed,
            best: self.best,
            generations: self.generation,
            stats: self.stats,
            population: self.population,
        }
    }
}

/// Executes GA trials.
///
/// # Usage
///
/// ```ignore
/// let problem = DeJongProblem::new(DeJongFunction::Sphere, 3);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best objective: {}", result.best.objective);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs one trial for the configured number of generations.
    pub fn run<P: BinaryProblem>(problem: &P, config: &GaConfig) -> Result<TrialResult> {
        let mut trial = Trial::initialize(problem, config)?;
        while trial.step() {}
        Ok(trial.finish())
    }

    /// Runs `batch.trials` independent trials and averages their statistics.
    ///
    /// Trial `i` is seeded with `base_seed + i` when a base seed is set.
    /// The first failing trial aborts the batch.
    pub fn run_batch<P: BinaryProblem>(problem: &P, batch: &BatchConfig) -> Result<BatchResult> {
        batch.validate()?;

        let run_one = |index: usize| {
            let mut config = batch.trial.clone();
            config.seed = Some(batch.trial_seed(index).unwrap_or_else(fresh_seed));
            Self::run(problem, &config)
        };

        #[cfg(feature = "parallel")]
        let trials: Result<Vec<TrialResult>> = if batch.parallel {
            (0..batch.trials).into_par_iter().map(run_one).collect()
        } else {
            (0..batch.trials).map(run_one).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let trials: Result<Vec<TrialResult>> = (0..batch.trials).map(run_one).collect();

        let trials = trials?;
        let stats: Vec<TrialStats> = trials.iter().map(|t| t.stats.clone()).collect();
        let summary = average_trials(&stats);
        Ok(BatchResult { trials, summary })
    }
}

/// The individual with the highest fitness (first on ties).
fn fittest(population: &[Individual]) -> &Individual {
    population
        .iter()
        .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
        .expect("population must not be empty")
}

fn log_generation(stats: &GenerationStats) {
    debug!(
        generation = stats.generation,
        min_objective = stats.min_objective,
        avg_objective = stats.avg_objective,
        max_fitness = stats.max_fitness,
        avg_fitness = stats.avg_fitness,
        "generation complete"
    );
}

// ============================================================================
// Tests
// ============================================================================
