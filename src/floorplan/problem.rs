//! The floor-plan layout landscape.

use super::rooms::{Aspect, Room, RoomType, Side};
use crate::chromosome::{Chromosome, ChromosomeLayout};
use crate::codec::FixedWidthCodec;
use crate::error::{GaError, Result};
use crate::fitness::FitnessScaling;
use crate::ga::{BinaryProblem, Evaluation};
use rand::Rng;
use std::fmt;
use tracing::warn;

/// Number of rooms in a plan.
pub const ROOM_COUNT: usize = RoomType::ALL.len();

/// Genes per room: length, width, x, y.
pub const ROOM_ATTRIBUTES: usize = 4;

const LENGTH: usize = 0;
const WIDTH: usize = 1;
const X: usize = 2;
const Y: usize = 3;

/// Default objective treated as the best attainable when scaling fitness.
pub const DEFAULT_BEST_OBJECTIVE: f64 = 600.0;

/// A complete layout: one room per category, in [`RoomType::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    pub rooms: [Room; ROOM_COUNT],
}

impl FloorPlan {
    /// Sum over rooms of cost (valid) or penalty (invalid).
    pub fn objective(&self) -> f64 {
        self.rooms.iter().map(Room::objective).sum()
    }

    pub fn is_valid(&self) -> bool {
        self.rooms.iter().all(Room::is_valid)
    }

    pub fn invalid_rooms(&self) -> usize {
        self.rooms.iter().filter(|r| !r.is_valid()).count()
    }
}

impl fmt::Display for FloorPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in &self.rooms {
            writeln!(f, "{room}")?;
        }
        write!(f, "objective {:.2}", self.objective())
    }
}

/// Sum of every category's penalty: the worst possible objective.
pub fn worst_objective() -> f64 {
    RoomType::ALL.iter().map(RoomType::penalty).sum()
}

/// Floor-plan layout as a [`BinaryProblem`].
///
/// The chromosome holds `7 rooms × 4 genes`, each gene a
/// [`FixedWidthCodec`] value. Room categories are not encoded; they are
/// assigned by position on decode.
#[derive(Debug, Clone)]
pub struct FloorPlanProblem {
    layout: ChromosomeLayout,
    scaling: FitnessScaling,
}

impl Default for FloorPlanProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorPlanProblem {
    /// Ten-bit genes over `[0, 102.4)` at 0.1 resolution (280-bit
    /// chromosomes), with fitness scaled between
    /// [`DEFAULT_BEST_OBJECTIVE`] and [`worst_objective`].
    pub fn new() -> Self {
        Self {
            layout: ChromosomeLayout::new(
                ROOM_COUNT,
                ROOM_ATTRIBUTES,
                FixedWidthCodec::new(0.0, 102.4, 10),
            ),
            scaling: FitnessScaling::Bounded {
                best: DEFAULT_BEST_OBJECTIVE,
                worst: worst_objective(),
            },
        }
    }

    /// Replaces the gene codec.
    ///
    /// # Panics
    /// Panics if the codec cannot represent every valid room dimension.
    pub fn with_gene(mut self, gene: FixedWidthCodec) -> Self {
        let (lo, hi) = RoomType::ALL
            .iter()
            .map(|t| t.constraints())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c.length.min()).min(c.width.min()), hi.max(c.length.max()).max(c.width.max()))
            });
        assert!(
            gene.low() <= lo && gene.max_value() >= hi,
            "gene domain [{}, {}] must cover room dimensions [{lo}, {hi}]",
            gene.low(),
            gene.max_value()
        );
        self.layout = ChromosomeLayout::new(ROOM_COUNT, ROOM_ATTRIBUTES, gene);
        self
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

    pub fn layout(&self) -> &ChromosomeLayout {
        &self.layout
    }

    pub fn scaling(&self) -> FitnessScaling {
        self.scaling
    }

    /// Encodes a plan. Attribute order is length, width, x, y.
    ///
    /// # Errors
    /// Returns [`GaError::Domain`] if any attribute is outside the gene domain.
    pub fn encode_plan(&self, plan: &FloorPlan) -> Result<Chromosome> {
        let values: Vec<f64> = plan
            .rooms
            .iter()
            .flat_map(|r| [r.length, r.width, r.x, r.y])
            .collect();
        self.layout.encode(&values)
    }

    /// Decodes a chromosome, tagging room `i` with `RoomType::ALL[i]`.
    ///
    /// # Panics
    /// Panics if the chromosome width does not match the layout.
    pub fn decode_plan(&self, chromosome: &Chromosome) -> FloorPlan {
        let values = self.layout.decode(chromosome);
        let rooms = std::array::from_fn(|i| {
            let genes = &values[i * ROOM_ATTRIBUTES..(i + 1) * ROOM_ATTRIBUTES];
            Room {
                room_type: RoomType::ALL[i],
                length: genes[LENGTH],
                width: genes[WIDTH],
                x: genes[X],
                y: genes[Y],
            }
        });
        FloorPlan { rooms }
    }

    /// Scores a decoded plan.
    pub fn evaluate_plan(&self, plan: &FloorPlan) -> Evaluation {
        let objective = plan.objective();
        Evaluation {
            objective,
            fitness: self.scaling.fitness(objective),
        }
    }

    /// Rejection-samples a room of `room_type` that is valid after being
    /// snapped to the gene grid.
    ///
    /// Fixed-ratio categories draw one side and derive the other from the
    /// ratio, in a random orientation, instead of hoping two independent
    /// draws line up.
    ///
    /// # Errors
    /// Returns [`GaError::ConstraintUnsatisfiable`] after `max_attempts`
    /// failed draws.
    pub fn random_room<R: Rng>(
        &self,
        room_type: RoomType,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Room> {
        let gene = self.layout.gene();
        let c = room_type.constraints();

        for _ in 0..max_attempts {
            let (length, width) = match c.aspect {
                Aspect::Fixed(ratio) => {
                    if rng.random_bool(0.5) {
                        let l = sample_side(&c.length, rng);
                        (l, l * ratio)
                    } else {
                        let w = sample_side(&c.width, rng);
                        (w * ratio, w)
                    }
                }
                _ => (sample_side(&c.length, rng), sample_side(&c.width, rng)),
            };
            let (Ok(length), Ok(width)) = (gene.quantize(length), gene.quantize(width)) else {
                continue;
            };
            let room = Room {
                room_type,
                length,
                width,
                x: random_position(gene, rng),
                y: random_position(gene, rng),
            };
            if room.is_valid() {
                return Ok(room);
            }
        }

        warn!(room = room_type.name(), max_attempts, "room initialization exhausted");
        Err(GaError::ConstraintUnsatisfiable {
            entity: format!("{} room", room_type.name()),
            attempts: max_attempts,
        })
    }

    /// Samples a plan in which every room is valid.
    pub fn random_plan<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<FloorPlan> {
        let mut sampled = Vec::with_capacity(ROOM_COUNT);
        for room_type in RoomType::ALL {
            sampled.push(self.random_room(room_type, rng, max_attempts)?);
        }
        Ok(FloorPlan {
            rooms: std::array::from_fn(|i| sampled[i]),
        })
    }
}

fn sample_side<R: Rng>(side: &Side, rng: &mut R) -> f64 {
    match *side {
        Side::Fixed(v) => v,
        Side::Between(r) => rng.random_range(r.low..=r.high),
    }
}

fn random_position<R: Rng>(gene: &FixedWidthCodec, rng: &mut R) -> f64 {
    let level = rng.random_range(0..gene.levels());
    gene.low() + gene.precision() * level as f64
}

impl BinaryProblem for FloorPlanProblem {
    fn name(&self) -> &str {
        "floor plan"
    }

    fn chromosome_width(&self) -> usize {
        self.layout.width()
    }

    fn create_chromosome<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Chromosome> {
        let plan = self.random_plan(rng, max_attempts)?;
        self.encode_plan(&plan)
    }

    fn evaluate<R: Rng>(&self, chromosome: &Chromosome, _rng: &mut R) -> Evaluation {
        self.evaluate_plan(&self.decode_plan(chromosome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaConfig, GaRunner};
    use crate::random::create_rng;

    fn sample_plan() -> FloorPlan {
        let rooms = std::array::from_fn(|i| {
            let room_type = RoomType::ALL[i];
            let (length, width) = match room_type {
                RoomType::Living => (10.0, 15.0),
                RoomType::Kitchen => (8.0, 10.0),
                RoomType::Bath => (5.5, 8.5),
                RoomType::Hall => (5.5, 5.0),
                RoomType::Bed1 => (10.0, 15.0),
                RoomType::Bed2 => (13.5, 9.0),
                RoomType::Bed3 => (9.0, 13.5),
            };
            Room {
                room_type,
                length,
                width,
                x: i as f64 * 10.0,
                y: 102.3 - i as f64,
            }
        });
        FloorPlan { rooms }
    }

    #[test]
    fn test_chromosome_width() {
        let problem = FloorPlanProblem::new();
        assert_eq!(problem.chromosome_width(), 280);
        assert_eq!(problem.layout().offset(3, 2), 140);
    }

    #[test]
    fn test_plan_roundtrip() {
        let problem = FloorPlanProblem::new();
        let plan = sample_plan();
        assert!(plan.is_valid());
        let decoded = problem.decode_plan(&problem.encode_plan(&plan).unwrap());
        for (a, b) in plan.rooms.iter().zip(decoded.rooms.iter()) {
            assert_eq!(a.room_type, b.room_type);
            assert!((a.length - b.length).abs() <= 0.05 + 1e-9);
            assert!((a.width - b.width).abs() <= 0.05 + 1e-9);
            assert!((a.x - b.x).abs() <= 0.05 + 1e-9);
            assert!((a.y - b.y).abs() <= 0.05 + 1e-9);
        }
        assert!(decoded.is_valid());
    }

    #[test]
    fn test_objective_sums_room_costs() {
        let plan = sample_plan();
        // 150 + 2*80 + 2*46.75 + 27.5 + 150 + 121.5 + 121.5
        assert!((plan.objective() - 824.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_room_contributes_penalty() {
        let mut plan = sample_plan();
        let before = plan.objective();
        plan.rooms[0].length = 19.0; // breaks the 1.5 ratio
        assert_eq!(plan.invalid_rooms(), 1);
        assert!((plan.objective() - (before - 150.0 + 300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_chromosome_is_all_penalty() {
        let problem = FloorPlanProblem::new();
        let plan = problem.decode_plan(&Chromosome::zeros(280));
        assert_eq!(plan.invalid_rooms(), ROOM_COUNT);
        assert!((plan.objective() - worst_objective()).abs() < 1e-9);
        let e = problem.evaluate_plan(&plan);
        assert!(e.fitness > 0.0);
        assert!((e.fitness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_rooms_are_valid_after_decoding() {
        let problem = FloorPlanProblem::new();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let chromosome = problem.create_chromosome(&mut rng, 10_000).unwrap();
            let plan = problem.decode_plan(&chromosome);
            assert!(plan.is_valid(), "invalid plan at birth:\n{plan}");
        }
    }

    #[test]
    fn test_exhausted_attempts_error() {
        let problem = FloorPlanProblem::new();
        let mut rng = create_rng(1);
        let err = problem.random_room(RoomType::Bed1, &mut rng, 0).unwrap_err();
        assert!(matches!(
            err,
            GaError::ConstraintUnsatisfiable { attempts: 0, .. }
        ));
    }

    #[test]
    #[should_panic(expected = "must cover room dimensions")]
    fn test_with_gene_rejects_narrow_domain() {
        FloorPlanProblem::new().with_gene(FixedWidthCodec::new(0.0, 10.24, 10));
    }

    #[test]
    fn test_with_gene_changes_width() {
        let wide = FloorPlanProblem::new().with_gene(FixedWidthCodec::new(0.0, 51.2, 9));
        assert_eq!(wide.chromosome_width(), 7 * 4 * 9);
    }

    #[test]
    fn test_with_scaling_validates_bounds() {
        let inverted = FloorPlanProblem::new().with_scaling(FitnessScaling::Bounded {
            best: 10.0,
            worst: 0.0,
        });
        assert!(matches!(inverted, Err(GaError::InvalidConfig(_))));

        let infinite = FloorPlanProblem::new().with_scaling(FitnessScaling::Bounded {
            best: 600.0,
            worst: f64::INFINITY,
        });
        assert!(matches!(infinite, Err(GaError::InvalidConfig(_))));

        let reciprocal = FloorPlanProblem::new()
            .with_scaling(FitnessScaling::Reciprocal)
            .unwrap();
        assert_eq!(reciprocal.scaling(), FitnessScaling::Reciprocal);
    }

    #[test]
    fn test_ga_lowers_layout_cost() {
        let problem = FloorPlanProblem::new();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(20)
            .with_seed(42);
        let result = GaRunner::run(&problem, &config).unwrap();
        let initial = &result.stats.generations[0];
        assert!(initial.max_objective < worst_objective());
        assert!(result.best.objective <= initial.min_objective);
        assert_eq!(result.stats.generations.len(), 21);
    }
}
