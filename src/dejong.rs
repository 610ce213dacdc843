//! De Jong benchmark landscape.
//!
//! The five classic test functions from De Jong's 1975 thesis, each over a
//! real vector whose components are binary-encoded with a function-specific
//! [`FixedWidthCodec`]. All functions are minimized; the global minimum of
//! F1–F4 (F4 without noise) is zero, F5's is roughly `0.998`.
//!
//! | Function | Domain | Bits/gene |
//! |---|---|---|
//! | F1 sphere | `[-5.12, 5.12)` | 10 |
//! | F2 Rosenbrock | `[-2.048, 2.048)` | 12 |
//! | F3 step | `[-5.12, 5.12)` | 10 |
//! | F4 noisy quartic | `[-1.28, 1.28)` | 8 |
//! | F5 Shekel's foxholes | `[-65.536, 65.536)` | 17 |

use crate::chromosome::{Chromosome, ChromosomeLayout};
use crate::codec::FixedWidthCodec;
use crate::error::{GaError, Result};
use crate::fitness::FitnessScaling;
use crate::ga::{BinaryProblem, Evaluation};
use rand::Rng;
use rand_distr::StandardNormal;

/// Foxhole centres `a[i][j]` for F5.
const FOXHOLES: [[f64; 25]; 2] = [
    [
        -32.0, -16.0, 0.0, 16.0, 32.0, -32.0, -16.0, 0.0, 16.0, 32.0, -32.0, -16.0, 0.0, 16.0,
        32.0, -32.0, -16.0, 0.0, 16.0, 32.0, -32.0, -16.0, 0.0, 16.0, 32.0,
    ],
    [
        -32.0, -32.0, -32.0, -32.0, -32.0, -16.0, -16.0, -16.0, -16.0, -16.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 16.0, 16.0, 16.0, 16.0, 16.0, 32.0, 32.0, 32.0, 32.0, 32.0,
    ],
];

const FOXHOLE_K: f64 = 500.0;

/// One of the five De Jong test functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeJongFunction {
    /// F1: `Σ x_i²`.
    Sphere,
    /// F2: `Σ 100(x_{i+1} − x_i²)² + (x_i − 1)²`.
    Rosenbrock,
    /// F3: `6n + Σ ⌊x_i⌋`.
    Step,
    /// F4: `Σ i·x_i⁴ + N(0, 1)`, with `i` starting at 1.
    ///
    /// This is De Jong's published form: weights start at 1 and a single
    /// Gaussian draw is added to the whole sum. Some implementations weight
    /// from 0 and add noise to every term instead; those give a different
    /// landscape.
    NoisyQuartic,
    /// F5: Shekel's foxholes, two-dimensional only.
    Foxholes,
}

impl DeJongFunction {
    pub const ALL: [DeJongFunction; 5] = [
        DeJongFunction::Sphere,
        DeJongFunction::Rosenbrock,
        DeJongFunction::Step,
        DeJongFunction::NoisyQuartic,
        DeJongFunction::Foxholes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeJongFunction::Sphere => "De Jong F1 (sphere)",
            DeJongFunction::Rosenbrock => "De Jong F2 (Rosenbrock)",
            DeJongFunction::Step => "De Jong F3 (step)",
            DeJongFunction::NoisyQuartic => "De Jong F4 (noisy quartic)",
            DeJongFunction::Foxholes => "De Jong F5 (foxholes)",
        }
    }

    /// Gene codec for this function's domain and resolution.
    pub fn codec(&self) -> FixedWidthCodec {
        match self {
            DeJongFunction::Sphere | DeJongFunction::Step => FixedWidthCodec::new(-5.12, 5.12, 10),
            DeJongFunction::Rosenbrock => FixedWidthCodec::new(-2.048, 2.048, 12),
            DeJongFunction::NoisyQuartic => FixedWidthCodec::new(-1.28, 1.28, 8),
            DeJongFunction::Foxholes => FixedWidthCodec::new(-65.536, 65.536, 17),
        }
    }

    /// Smallest dimension the function is defined for.
    pub fn min_dimension(&self) -> usize {
        match self {
            DeJongFunction::Rosenbrock | DeJongFunction::Foxholes => 2,
            _ => 1,
        }
    }

    /// Largest dimension the function is defined for, if bounded.
    pub fn max_dimension(&self) -> Option<usize> {
        match self {
            DeJongFunction::Foxholes => Some(2),
            _ => None,
        }
    }

    /// Evaluates the function without noise.
    pub fn value(&self, x: &[f64]) -> f64 {
        match self {
            DeJongFunction::Sphere => x.iter().map(|v| v * v).sum(),
            DeJongFunction::Rosenbrock => x
                .windows(2)
                .map(|w| {
                    let a = w[1] - w[0] * w[0];
                    let b = w[0] - 1.0;
                    100.0 * a * a + b * b
                })
                .sum(),
            DeJongFunction::Step => 6.0 * x.len() as f64 + x.iter().map(|v| v.floor()).sum::<f64>(),
            DeJongFunction::NoisyQuartic => x
                .iter()
                .enumerate()
                .map(|(i, v)| (i + 1) as f64 * v.powi(4))
                .sum(),
            DeJongFunction::Foxholes => {
                let inner: f64 = (0..25)
                    .map(|j| {
                        let denom: f64 = (j + 1) as f64
                            + x.iter()
                                .zip(FOXHOLES.iter())
                                .map(|(xi, row)| (xi - row[j]).powi(6))
                                .sum::<f64>();
                        1.0 / denom
                    })
                    .sum();
                1.0 / (1.0 / FOXHOLE_K + inner)
            }
        }
    }

    /// Evaluates the function, adding unit Gaussian noise for F4.
    pub fn evaluate<R: Rng>(&self, x: &[f64], noisy: bool, rng: &mut R) -> f64 {
        let value = self.value(x);
        if noisy && *self == DeJongFunction::NoisyQuartic {
            value + rng.sample::<f64, _>(StandardNormal)
        } else {
            value
        }
    }
}

/// A De Jong function exposed as a [`BinaryProblem`].
#[derive(Debug, Clone)]
pub struct DeJongProblem {
    function: DeJongFunction,
    layout: ChromosomeLayout,
    scaling: FitnessScaling,
    noisy: bool,
}

impl DeJongProblem {
    /// Creates a problem over `dimension` genes.
    ///
    /// # Panics
    /// Panics if `dimension` is outside the function's supported range.
    pub fn new(function: DeJongFunction, dimension: usize) -> Self {
        assert!(
            dimension >= function.min_dimension()
                && function.max_dimension().map_or(true, |max| dimension <= max),
            "{} does not support dimension {dimension}",
            function.name()
        );
        Self {
            function,
            layout: ChromosomeLayout::new(dimension, 1, function.codec()),
            scaling: FitnessScaling::Reciprocal,
            noisy: true,
        }
    }

    /// Replaces the objective-to-fitness transform.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if the scaling bounds are unusable.
    pub fn with_scaling(mut self, scaling: FitnessScaling) -> Result<Self> {
        scaling.validate().map_err(GaError::InvalidConfig)?;
        self.scaling = scaling;
        Ok(self)
    }

    /// Enables or disables F4's Gaussian noise.
    pub fn with_noise(mut self, noisy: bool) -> Self {
        self.noisy = noisy;
        self
    }

    pub fn function(&self) -> DeJongFunction {
        self.function
    }

    pub fn dimension(&self) -> usize {
        self.layout.entities()
    }

    pub fn layout(&self) -> &ChromosomeLayout {
        &self.layout
    }

    /// Encodes a point. Components must lie in the function's domain.
    pub fn encode(&self, x: &[f64]) -> Result<Chromosome> {
        self.layout.encode(x)
    }

    /// Decodes a chromosome into its point.
    pub fn decode(&self, chromosome: &Chromosome) -> Vec<f64> {
        self.layout.decode(chromosome)
    }
}

impl BinaryProblem for DeJongProblem {
    fn name(&self) -> &str {
        self.function.name()
    }

    fn chromosome_width(&self) -> usize {
        self.layout.width()
    }

    // Every bit pattern decodes inside the domain, so no rejection is needed.
    fn create_chromosome<R: Rng>(&self, rng: &mut R, _max_attempts: usize) -> Result<Chromosome> {
        Ok(Chromosome::random(self.layout.width(), rng))
    }

    fn evaluate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Evaluation {
        let x = self.decode(chromosome);
        let objective = self.function.evaluate(&x, self.noisy, rng);
        Evaluation {
            objective,
            fitness: self.scaling.fitness(objective),
        }
    }
}
