//! Chromosome bit vectors and their positional gene layout.
//!
//! A chromosome is the concatenation of `entities × attributes` genes, each
//! produced by the same [`FixedWidthCodec`]. The layout carries no
//! delimiters: gene `(entity, attribute)` always lives at bit offset
//! `(entity * attributes + attribute) * gene_width`, and encode/decode must
//! agree on that ordering.

use crate::codec::FixedWidthCodec;
use crate::error::Result;
use rand::Rng;

/// Fixed-width bit vector holding one individual's genotype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// An all-zero chromosome of `width` bits.
    pub fn zeros(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    /// A chromosome of `width` independently uniform bits.
    pub fn random<R: Rng>(width: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..width).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Flips the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of positions at which `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Positional layout of genes within a chromosome.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromosomeLayout {
    entities: usize,
    attributes: usize,
    gene: FixedWidthCodec,
}

impl ChromosomeLayout {
    /// Creates a layout of `entities` groups of `attributes` genes.
    ///
    /// # Panics
    /// Panics if `entities` or `attributes` is zero.
    pub fn new(entities: usize, attributes: usize, gene: FixedWidthCodec) -> Self {
        assert!(
            entities > 0 && attributes > 0,
            "layout needs at least one entity and one attribute"
        );
        Self {
            entities,
            attributes,
            gene,
        }
    }

    pub fn entities(&self) -> usize {
        self.entities
    }

    pub fn attributes(&self) -> usize {
        self.attributes
    }

    pub fn gene(&self) -> &FixedWidthCodec {
        &self.gene
    }

    /// Total number of genes, `entities × attributes`.
    pub fn gene_count(&self) -> usize {
        self.entities * self.attributes
    }

    /// Total chromosome width in bits.
    pub fn width(&self) -> usize {
        self.gene_count() * self.gene.width()
    }

    /// Bit offset of gene `(entity, attribute)`.
    pub fn offset(&self, entity: usize, attribute: usize) -> usize {
        assert!(entity < self.entities && attribute < self.attributes);
        (entity * self.attributes + attribute) * self.gene.width()
    }

    /// Encodes a flat, entity-major slice of gene values.
    ///
    /// # Errors
    /// Returns [`GaError::Domain`](crate::error::GaError::Domain) if any value
    /// lies outside the gene codec's domain.
    ///
    /// # Panics
    /// Panics if `values.len() != gene_count()`.
    pub fn encode(&self, values: &[f64]) -> Result<Chromosome> {
        assert_eq!(
            values.len(),
            self.gene_count(),
            "expected {} gene values, got {}",
            self.gene_count(),
            values.len()
        );
        let mut chromosome = Chromosome::zeros(self.width());
        for (gene, &value) in chromosome
            .bits
            .chunks_exact_mut(self.gene.width())
            .zip(values)
        {
            self.gene.encode_into(value, gene)?;
        }
        Ok(chromosome)
    }

    /// Decodes a chromosome into a flat, entity-major vector of gene values.
    ///
    /// # Panics
    /// Panics if the chromosome width does not match the layout.
    pub fn decode(&self, chromosome: &Chromosome) -> Vec<f64> {
        self.assert_width(chromosome);
        chromosome
            .bits
            .chunks_exact(self.gene.width())
            .map(|gene| self.gene.decode(gene))
            .collect()
    }

    /// Decodes a single gene.
    pub fn decode_gene(&self, chromosome: &Chromosome, entity: usize, attribute: usize) -> f64 {
        self.assert_width(chromosome);
        let start = self.offset(entity, attribute);
        self.gene
            .decode(&chromosome.bits[start..start + self.gene.width()])
    }

    fn assert_width(&self, chromosome: &Chromosome) {
        assert_eq!(
            chromosome.len(),
            self.width(),
            "chromosome has {} bits, layout expects {}",
            chromosome.len(),
            self.width()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn layout() -> ChromosomeLayout {
        ChromosomeLayout::new(3, 2, FixedWidthCodec::new(0.0, 102.4, 10))
    }

    #[test]
    fn test_width_and_offsets() {
        let l = layout();
        assert_eq!(l.gene_count(), 6);
        assert_eq!(l.width(), 60);
        assert_eq!(l.offset(0, 0), 0);
        assert_eq!(l.offset(0, 1), 10);
        assert_eq!(l.offset(2, 1), 50);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let l = layout();
        let values = [8.0, 12.0, 5.5, 8.5, 0.0, 102.3];
        let chromosome = l.encode(&values).unwrap();
        assert_eq!(chromosome.len(), 60);
        let back = l.decode(&chromosome);
        for (a, b) in values.iter().zip(&back) {
            assert!((a - b).abs() <= 0.05 + 1e-9, "{a} vs {b}");
        }
        assert!((l.decode_gene(&chromosome, 1, 1) - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_encode_rejects_out_of_domain() {
        let l = layout();
        assert!(l.encode(&[1.0, 1.0, 1.0, 1.0, 1.0, 200.0]).is_err());
    }

    #[test]
    #[should_panic(expected = "layout expects 60")]
    fn test_decode_wrong_width_panics() {
        layout().decode(&Chromosome::zeros(59));
    }

    #[test]
    fn test_flip_and_hamming() {
        let mut rng = create_rng(42);
        let a = Chromosome::random(64, &mut rng);
        let mut b = a.clone();
        b.flip(0);
        b.flip(63);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_display() {
        let c = Chromosome::from_bits(vec![true, false, true, true]);
        assert_eq!(c.to_string(), "1011");
    }
}
