//! Generational genetic algorithm over binary chromosomes.
//!
//! Users plug a fitness landscape in by implementing [`BinaryProblem`]; the
//! engine supplies everything else: initialization, roulette selection,
//! single-point crossover with per-bit mutation, full generational
//! replacement, and statistics.
//!
//! # Key Types
//!
//! - [`GaConfig`] / [`BatchConfig`]: trial and batch parameters
//! - [`GaRunner`]: runs trials and batches
//! - [`Trial`]: one run, steppable a generation at a time
//! - [`TrialStats`] / [`GenerationStats`]: convergence measurements
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and per-bit mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic Adaptive Systems"

mod config;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::{BatchConfig, GaConfig};
pub use operators::Reproduction;
pub use runner::{BatchResult, GaRunner, Trial, TrialPhase, TrialResult};
pub use selection::CumulativeDistribution;
pub use stats::{GenerationStats, TrialStats};
pub use types::{BinaryProblem, Evaluation, Individual};
