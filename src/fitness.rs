//! Objective-to-fitness transforms.
//!
//! Objectives are costs (lower is better). Roulette selection needs the
//! opposite: a non-negative weight where higher is better. Both transforms
//! here are monotonically decreasing in the objective and strictly
//! positive for every finite objective, scaled so the best attainable
//! individual scores [`FITNESS_SCALE`].

/// Fitness assigned to an individual at the best objective bound.
pub const FITNESS_SCALE: f64 = 100.0;

/// How a raw objective is mapped onto a `(0, 100]` fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessScaling {
    /// `100 / (max(objective, 0) + 1)`.
    ///
    /// Suited to objectives whose global minimum is zero, such as the
    /// De Jong functions. Negative objectives (possible under F4 noise)
    /// score as if they were zero.
    Reciprocal,

    /// Exponential decay between estimated objective bounds.
    ///
    /// `best` maps to 100 and `worst` to 1; objectives below `best` are
    /// clamped to 100 and objectives above `worst` keep decaying toward
    /// (but never reach) zero.
    Bounded { best: f64, worst: f64 },
}

impl FitnessScaling {
    /// Converts an objective into a fitness.
    pub fn fitness(&self, objective: f64) -> f64 {
        let raw = match *self {
            FitnessScaling::Reciprocal => FITNESS_SCALE / (objective.max(0.0) + 1.0),
            FitnessScaling::Bounded { best, worst } => {
                let span = (worst - best).abs().max(f64::EPSILON);
                let normalized = ((objective - best) / span).max(0.0);
                FITNESS_SCALE * FITNESS_SCALE.powf(-normalized)
            }
        };
        raw.max(f64::MIN_POSITIVE)
    }

    /// Checks that the bounds of a [`Bounded`](Self::Bounded) scaling are usable.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            FitnessScaling::Reciprocal => Ok(()),
            FitnessScaling::Bounded { best, worst } => {
                if !best.is_finite() || !worst.is_finite() {
                    return Err("fitness bounds must be finite".into());
                }
                if worst <= best {
                    return Err(format!(
                        "worst objective bound ({worst}) must exceed best ({best})"
                    ));
                }
                Ok(())
            }
        }
    }
}
