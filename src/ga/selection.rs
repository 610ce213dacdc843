//! Fitness-proportional (roulette wheel) selection.
//!
//! Selection happens in two steps: [`CumulativeDistribution::from_population`]
//! builds the running sum of normalized fitness once per generation, and
//! [`CumulativeDistribution::select_pair`] draws parents by inverse-CDF
//! sampling as many times as the generation needs.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use super::types::Individual;
use rand::Rng;
use tracing::warn;

/// Cumulative selection probabilities over a population, in index order.
///
/// Non-decreasing, with a last element of approximately `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    cumulative: Vec<f64>,
}

impl CumulativeDistribution {
    /// Builds the distribution `cdf[i] = Σ_{j ≤ i} fitness_j / total`.
    ///
    /// When the total fitness is exactly zero the distribution falls back
    /// to the uniform ladder `(i + 1) / n`, so every individual stays
    /// selectable.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(population: &[Individual]) -> Self {
        let fitness: Vec<f64> = population.iter().map(|ind| ind.fitness).collect();
        Self::from_fitness(&fitness)
    }

    /// Builds the distribution from raw fitness values.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn from_fitness(fitness: &[f64]) -> Self {
        assert!(
            !fitness.is_empty(),
            "cannot build a distribution over an empty population"
        );
        let n = fitness.len();
        let total: f64 = fitness.iter().sum();

        if total == 0.0 {
            warn!(size = n, "total fitness is zero, using uniform selection");
            return Self {
                cumulative: (1..=n).map(|i| i as f64 / n as f64).collect(),
            };
        }

        let mut running = 0.0;
        let cumulative = fitness
            .iter()
            .map(|&f| {
                running += f / total;
                running
            })
            .collect();
        Self { cumulative }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    /// Returns the first index `j` with `u <= cdf[j]`.
    ///
    /// If floating-point drift leaves the last entry below `u`, the last
    /// index is returned.
    pub fn index_for(&self, u: f64) -> usize {
        let j = self.cumulative.partition_point(|&c| c < u);
        j.min(self.cumulative.len() - 1)
    }

    /// Draws one index with probability proportional to fitness.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        self.index_for(rng.random_range(0.0..1.0))
    }

    /// Draws two parents independently. The same individual may be picked
    /// twice.
    ///
    /// # Panics
    /// Panics if the population length differs from the distribution's.
    pub fn select_pair<'a, R: Rng>(
        &self,
        population: &'a [Individual],
        rng: &mut R,
    ) -> (&'a Individual, &'a Individual) {
        assert_eq!(
            population.len(),
            self.cumulative.len(),
            "distribution was built for a different population"
        );
        let a = self.sample(rng);
        let b = self.sample(rng);
        (&population[a], &population[b])
    }
}
