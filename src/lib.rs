//! Binary-encoded genetic algorithm for bounded real-valued optimization.
//!
//! Candidate solutions are fixed-width bit strings. Each gene is a real
//! number quantized onto `2^w` evenly spaced levels of a half-open domain
//! `[low, high)`. The engine evolves a population by fitness-proportional
//! (roulette) selection, single-point crossover and per-bit mutation with
//! full generational replacement, recording per-generation statistics.
//!
//! Two landscapes ship with the crate:
//!
//! - **Floor plan**: seven-room residential layout minimizing construction
//!   cost under dimension, area and aspect-ratio constraints.
//! - **De Jong F1–F5**: the classic GA benchmark functions.
//!
//! # Modules
//!
//! - [`codec`]: real value ⇄ fixed-width bit string
//! - [`chromosome`]: bit strings and multi-gene layouts
//! - [`fitness`]: objective-to-fitness transforms
//! - [`ga`]: the evolutionary engine
//! - [`floorplan`], [`dejong`]: problem definitions
//! - [`report`]: CSV output and cross-trial averaging
//! - [`random`]: seeded random number generation
//!
//! # Example
//!
//! ```no_run
//! use bitga::dejong::{DeJongFunction, DeJongProblem};
//! use bitga::ga::{GaConfig, GaRunner};
//!
//! let problem = DeJongProblem::new(DeJongFunction::Sphere, 3);
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! println!("best objective: {}", result.best.objective);
//! ```

pub mod chromosome;
pub mod codec;
pub mod dejong;
pub mod error;
pub mod fitness;
pub mod floorplan;
pub mod ga;
pub mod random;
pub mod report;

pub use error::{GaError, Result};
