//! Core types shared by the GA engine and problem definitions.
//!
//! [`BinaryProblem`] is the contract between the generic generation loop
//! and a fitness landscape; [`Individual`] is the value the loop moves
//! around.

use crate::chromosome::Chromosome;
use crate::error::Result;
use rand::Rng;

/// Result of scoring one chromosome.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Raw domain cost. Lower is better.
    pub objective: f64,
    /// Selection weight derived from the objective. Higher is better, always > 0.
    pub fitness: f64,
}

/// One member of a population.
///
/// Individuals are plain values: children are built fresh by the
/// reproduction operator and a whole generation is dropped when its
/// successor replaces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub chromosome: Chromosome,
    pub objective: f64,
    pub fitness: f64,
}

impl Individual {
    /// Pairs a chromosome with its evaluation.
    pub fn new(chromosome: Chromosome, evaluation: Evaluation) -> Self {
        Self {
            chromosome,
            objective: evaluation.objective,
            fitness: evaluation.fitness,
        }
    }

    /// Builds an individual by evaluating `chromosome` against `problem`.
    pub fn evaluated<P: BinaryProblem + ?Sized, R: Rng>(
        problem: &P,
        chromosome: Chromosome,
        rng: &mut R,
    ) -> Self {
        let evaluation = problem.evaluate(&chromosome, rng);
        Self::new(chromosome, evaluation)
    }

    pub fn evaluation(&self) -> Evaluation {
        Evaluation {
            objective: self.objective,
            fitness: self.fitness,
        }
    }
}

/// A fitness landscape over fixed-width binary chromosomes.
///
/// Implementors decide how bits map to a phenotype and how that phenotype
/// is scored. The generation loop only ever sees chromosomes and
/// [`Evaluation`]s.
///
/// # Implementing
///
/// ```ignore
/// struct OneMax { width: usize }
///
/// impl BinaryProblem for OneMax {
///     fn name(&self) -> &str { "OneMax" }
///     fn chromosome_width(&self) -> usize { self.width }
///     fn create_chromosome<R: Rng>(&self, rng: &mut R, _max_attempts: usize) -> Result<Chromosome> {
///         Ok(Chromosome::random(self.width, rng))
///     }
///     fn evaluate<R: Rng>(&self, c: &Chromosome, _rng: &mut R) -> Evaluation {
///         let zeros = c.bits().iter().filter(|b| !**b).count() as f64;
///         Evaluation { objective: zeros, fitness: 100.0 / (zeros + 1.0) }
///     }
/// }
/// ```
pub trait BinaryProblem: Send + Sync {
    /// Human-readable landscape name, used in logs.
    fn name(&self) -> &str;

    /// Width in bits of every chromosome this problem produces or accepts.
    fn chromosome_width(&self) -> usize;

    /// Creates one initial chromosome.
    ///
    /// Implementations that rejection-sample a valid phenotype must give up
    /// after `max_attempts` tries per entity and return
    /// [`GaError::ConstraintUnsatisfiable`](crate::error::GaError::ConstraintUnsatisfiable).
    fn create_chromosome<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Chromosome>;

    /// Decodes and scores a chromosome.
    ///
    /// The generator is the trial's own, so stochastic objectives stay
    /// reproducible from the trial seed.
    fn evaluate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Evaluation;

    /// Called after every completed generation with its index (1-based).
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _population: &[Individual]) {}
}
