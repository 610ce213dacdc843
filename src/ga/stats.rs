//! Per-generation and per-trial statistics.

use super::types::Individual;

/// Summary of one generation's population.
///
/// Written once when the generation is complete and never modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,
    pub min_fitness: f64,
    pub max_fitness: f64,
    pub avg_fitness: f64,
    pub min_objective: f64,
    pub max_objective: f64,
    pub avg_objective: f64,
    /// Fittest individual of the generation, when tracking is enabled.
    pub best: Option<Individual>,
}

impl GenerationStats {
    /// Summarizes `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(generation: usize, population: &[Individual], track_best: bool) -> Self {
        assert!(!population.is_empty(), "cannot summarize an empty population");
        let n = population.len() as f64;

        let mut stats = Self {
            generation,
            min_fitness: f64::INFINITY,
            max_fitness: f64::NEG_INFINITY,
            avg_fitness: 0.0,
            min_objective: f64::INFINITY,
            max_objective: f64::NEG_INFINITY,
            avg_objective: 0.0,
            best: None,
        };
        let mut best_idx = 0;
        for (i, ind) in population.iter().enumerate() {
            stats.min_objective = stats.min_objective.min(ind.objective);
            stats.max_objective = stats.max_objective.max(ind.objective);
            stats.avg_objective += ind.objective;

            if ind.fitness > stats.max_fitness {
                best_idx = i;
            }
            stats.min_fitness = stats.min_fitness.min(ind.fitness);
            stats.max_fitness = stats.max_fitness.max(ind.fitness);
            stats.avg_fitness += ind.fitness;
        }
        stats.avg_objective /= n;
        stats.avg_fitness /= n;
        if track_best {
            stats.best = Some(population[best_idx].clone());
        }
        stats
    }
}

/// Statistics for one complete trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialStats {
    /// Seed the trial's generator was created from.
    pub seed: u64,
    /// One entry per generation index `0..=generations`.
    pub generations: Vec<GenerationStats>,
}

impl TrialStats {
    pub fn new(seed: u64, capacity: usize) -> Self {
        Self {
            seed,
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Appends the snapshot for the next generation index.
    pub fn record(&mut self, stats: GenerationStats) {
        debug_assert_eq!(stats.generation, self.generations.len());
        self.generations.push(stats);
    }

    /// The fittest individual recorded across all generations.
    pub fn best(&self) -> Option<&Individual> {
        self.generations
            .iter()
            .filter_map(|g| g.best.as_ref())
            .fold(None, |acc: Option<&Individual>, ind| match acc {
                Some(b) if b.fitness >= ind.fitness => Some(b),
                _ => Some(ind),
            })
    }

    /// Lowest objective seen in any generation.
    pub fn best_objective(&self) -> f64 {
        self.generations
            .iter()
            .map(|g| g.min_objective)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;

    fn ind(objective: f64, fitness: f64) -> Individual {
        Individual {
            chromosome: Chromosome::zeros(2),
            objective,
            fitness,
        }
    }

    #[test]
    fn test_summary_values() {
        let pop = vec![ind(3.0, 25.0), ind(1.0, 50.0), ind(5.0, 1.0), ind(7.0, 4.0)];
        let s = GenerationStats::from_population(0, &pop, true);
        assert_eq!(s.min_objective, 1.0);
        assert_eq!(s.max_objective, 7.0);
        assert_eq!(s.avg_objective, 4.0);
        assert_eq!(s.min_fitness, 1.0);
        assert_eq!(s.max_fitness, 50.0);
        assert_eq!(s.avg_fitness, 20.0);
        assert_eq!(s.best.unwrap().objective, 1.0);
    }

    #[test]
    fn test_best_not_tracked() {
        let s = GenerationStats::from_population(3, &[ind(1.0, 1.0)], false);
        assert!(s.best.is_none());
        assert_eq!(s.generation, 3);
    }

    #[test]
    fn test_trial_best_across_generations() {
        let mut trial = TrialStats::new(42, 3);
        trial.record(GenerationStats::from_population(0, &[ind(9.0, 10.0)], true));
        trial.record(GenerationStats::from_population(1, &[ind(2.0, 80.0)], true));
        trial.record(GenerationStats::from_population(2, &[ind(4.0, 40.0)], true));
        assert_eq!(trial.best().unwrap().fitness, 80.0);
        assert_eq!(trial.best_objective(), 2.0);
        assert_eq!(trial.seed, 42);
    }
}
