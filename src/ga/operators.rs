//! Binary reproduction operators.
//!
//! Two parents produce two children. With probability `crossover_rate`
//! the children are a single-point recombination of the parents, otherwise
//! they start as copies. Either way every bit is passed through
//! [`mutate_bit`] as it is written, so mutation never touches an existing
//! individual.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (one-point crossover, per-bit mutation)

use crate::chromosome::Chromosome;
use rand::Rng;

/// Crossover and mutation probabilities for one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reproduction {
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl Reproduction {
    /// # Panics
    /// Panics if either rate is outside `[0, 1]` or NaN.
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&crossover_rate),
            "crossover rate must be in [0, 1], got {crossover_rate}"
        );
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "mutation rate must be in [0, 1], got {mutation_rate}"
        );
        Self {
            crossover_rate,
            mutation_rate,
        }
    }

    /// Produces two children from two parents.
    ///
    /// # Panics
    /// Panics if the parents differ in width or are empty.
    pub fn reproduce<R: Rng>(
        &self,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = parent_a.len();
        assert_eq!(n, parent_b.len(), "parents must have equal width");
        assert!(n > 0, "parents must not be empty");

        if rng.random_bool(self.crossover_rate) {
            let point = rng.random_range(0..n);
            single_point_crossover(parent_a, parent_b, point, self.mutation_rate, rng)
        } else {
            single_point_crossover(parent_a, parent_b, n, self.mutation_rate, rng)
        }
    }
}

/// Single-point crossover at `point`, mutating each bit as it is copied.
///
/// `child_a` takes `parent_a[..point]` followed by `parent_b[point..]`;
/// `child_b` is the complementary swap. A `point` equal to the width
/// yields plain (mutated) copies, and `point == 0` swaps the parents
/// outright.
///
/// # Panics
/// Panics if the parents differ in width or `point` exceeds it.
pub fn single_point_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    point: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal width");
    assert!(point <= n, "crossover point {point} beyond width {n}");
    assert!(
        (0.0..=1.0).contains(&mutation_rate),
        "mutation rate must be in [0, 1], got {mutation_rate}"
    );

    let (a, b) = (parent_a.bits(), parent_b.bits());
    let mut child_a = Vec::with_capacity(n);
    let mut child_b = Vec::with_capacity(n);
    for i in 0..n {
        let (from_a, from_b) = if i < point { (a[i], b[i]) } else { (b[i], a[i]) };
        child_a.push(mutate_bit(from_a, mutation_rate, rng));
        child_b.push(mutate_bit(from_b, mutation_rate, rng));
    }
    (Chromosome::from_bits(child_a), Chromosome::from_bits(child_b))
}

/// Returns `bit`, flipped with probability `rate`.
#[inline]
pub fn mutate_bit<R: Rng>(bit: bool, rate: f64, rng: &mut R) -> bool {
    if rng.random_bool(rate) {
        !bit
    } else {
        bit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn pair(rng: &mut impl Rng) -> (Chromosome, Chromosome) {
        (Chromosome::random(40, rng), Chromosome::random(40, rng))
    }

    #[test]
    fn test_point_zero_swaps_parents() {
        let mut rng = create_rng(42);
        let (a, b) = pair(&mut rng);
        let (ca, cb) = single_point_crossover(&a, &b, 0, 0.0, &mut rng);
        assert_eq!(ca, b);
        assert_eq!(cb, a);
    }

    #[test]
    fn test_point_at_width_copies() {
        let mut rng = create_rng(42);
        let (a, b) = pair(&mut rng);
        let (ca, cb) = single_point_crossover(&a, &b, 40, 0.0, &mut rng);
        assert_eq!(ca, a);
        assert_eq!(cb, b);
    }

    #[test]
    fn test_mid_point_splices() {
        let a = Chromosome::from_bits(vec![true; 8]);
        let b = Chromosome::from_bits(vec![false; 8]);
        let mut rng = create_rng(1);
        let (ca, cb) = single_point_crossover(&a, &b, 3, 0.0, &mut rng);
        assert_eq!(ca.to_string(), "11100000");
        assert_eq!(cb.to_string(), "00011111");
    }

    #[test]
    fn test_full_mutation_flips_every_bit() {
        let mut rng = create_rng(42);
        let (a, b) = pair(&mut rng);
        let ops = Reproduction::new(0.0, 1.0);
        let (ca, cb) = ops.reproduce(&a, &b, &mut rng);
        assert_eq!(ca.hamming_distance(&a), 40);
        assert_eq!(cb.hamming_distance(&b), 40);
    }

    #[test]
    fn test_no_crossover_no_mutation_copies() {
        let mut rng = create_rng(7);
        let (a, b) = pair(&mut rng);
        let ops = Reproduction::new(0.0, 0.0);
        for _ in 0..20 {
            let (ca, cb) = ops.reproduce(&a, &b, &mut rng);
            assert_eq!(ca, a);
            assert_eq!(cb, b);
        }
    }

    #[test]
    fn test_crossover_preserves_alleles() {
        let mut rng = create_rng(9);
        let (a, b) = pair(&mut rng);
        let ops = Reproduction::new(1.0, 0.0);
        for _ in 0..50 {
            let (ca, cb) = ops.reproduce(&a, &b, &mut rng);
            for i in 0..40 {
                let mut parents = [a.bits()[i], b.bits()[i]];
                let mut children = [ca.bits()[i], cb.bits()[i]];
                parents.sort();
                children.sort();
                assert_eq!(parents, children, "bit {i} not conserved");
            }
        }
    }

    #[test]
    fn test_mutation_rate_is_roughly_honoured() {
        let mut rng = create_rng(3);
        let flips = (0..100_000)
            .filter(|_| mutate_bit(false, 0.01, &mut rng))
            .count();
        assert!((700..1300).contains(&flips), "got {flips} flips");
    }

    #[test]
    #[should_panic(expected = "mutation rate must be in [0, 1]")]
    fn test_mutation_rate_above_one_panics() {
        Reproduction::new(0.7, 1.5);
    }

    #[test]
    #[should_panic(expected = "crossover rate must be in [0, 1]")]
    fn test_nan_crossover_rate_panics() {
        Reproduction::new(f64::NAN, 0.001);
    }

    #[test]
    #[should_panic(expected = "parents must have equal width")]
    fn test_width_mismatch_panics() {
        let mut rng = create_rng(1);
        let ops = Reproduction::new(0.7, 0.001);
        ops.reproduce(&Chromosome::zeros(4), &Chromosome::zeros(5), &mut rng);
    }
}
