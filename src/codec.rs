//! Fixed-width real-to-binary codec.
//!
//! A [`FixedWidthCodec`] discretizes the half-open domain `[low, high)` into
//! `2^width` evenly spaced levels `low + k * step`, with
//! `step = (high - low) / 2^width`. A value is encoded by shifting and
//! scaling it onto the level grid, rounding to the nearest level, and
//! writing the level as a big-endian (most-significant bit first) bit
//! vector of exactly `width` bits.
//!
//! The largest representable value is `high - step`, so the step also
//! equals `(high - step - low) / (2^width - 1)`: a 10-bit codec over
//! `[-5.12, 5.12)` spans `-5.12..=5.11` in 1024 steps of `0.01`.
//!
//! # Rounding
//!
//! Rounding uses [`f64::round`] (ties away from zero). Because the shifted
//! value is never negative, ties always round up. Values in the top half
//! step `[high - step/2, high)` saturate to the last level.

use crate::error::{GaError, Result};

/// Maximum supported gene width in bits.
pub const MAX_WIDTH: usize = 32;

/// Maps a bounded real value to and from a fixed-length bit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWidthCodec {
    low: f64,
    high: f64,
    width: usize,
}

impl FixedWidthCodec {
    /// Creates a codec over `[low, high)` using `width` bits.
    ///
    /// # Panics
    /// Panics if `low >= high`, either bound is not finite, or `width` is
    /// not in `1..=MAX_WIDTH`.
    pub fn new(low: f64, high: f64, width: usize) -> Self {
        assert!(
            low.is_finite() && high.is_finite() && low < high,
            "codec domain must be a finite, non-empty interval"
        );
        assert!(
            (1..=MAX_WIDTH).contains(&width),
            "codec width must be in 1..={MAX_WIDTH}, got {width}"
        );
        Self { low, high, width }
    }

    /// Inclusive lower bound of the domain.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Exclusive upper bound of the domain.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Number of bits produced by [`encode`](Self::encode).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of discrete levels, `2^width`.
    pub fn levels(&self) -> u64 {
        1u64 << self.width
    }

    /// Distance between adjacent levels.
    ///
    /// Round-trip error for values up to [`max_value`](Self::max_value) is
    /// at most half of this.
    pub fn precision(&self) -> f64 {
        (self.high - self.low) / self.levels() as f64
    }

    /// Largest representable value, `high - precision`.
    pub fn max_value(&self) -> f64 {
        self.level_value(self.levels() - 1)
    }

    /// Returns `true` if `value` lies in `[low, high)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }

    /// Clamps `value` onto the representable range `[low, max_value]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.max_value())
    }

    /// Encodes `value` as a big-endian bit vector of [`width`](Self::width) bits.
    ///
    /// # Errors
    /// Returns [`GaError::Domain`] if `value` is NaN or outside `[low, high)`.
    pub fn encode(&self, value: f64) -> Result<Vec<bool>> {
        let mut bits = vec![false; self.width];
        self.encode_into(value, &mut bits)?;
        Ok(bits)
    }

    /// Encodes `value` into an existing slice of exactly `width` bits.
    ///
    /// # Panics
    /// Panics if `out.len() != width`.
    pub fn encode_into(&self, value: f64, out: &mut [bool]) -> Result<()> {
        assert_eq!(
            out.len(),
            self.width,
            "output slice must be exactly {} bits",
            self.width
        );
        let level = self.level_of(value)?;
        write_uint(level, out);
        Ok(())
    }

    /// Decodes a big-endian bit vector back to a real value.
    ///
    /// # Panics
    /// Panics if `bits.len() != width`.
    pub fn decode(&self, bits: &[bool]) -> f64 {
        assert_eq!(
            bits.len(),
            self.width,
            "codec expects exactly {} bits, got {}",
            self.width,
            bits.len()
        );
        self.level_value(bits_to_uint(bits))
    }

    /// Snaps `value` onto the level grid, equivalent to `decode(encode(value))`.
    pub fn quantize(&self, value: f64) -> Result<f64> {
        Ok(self.level_value(self.level_of(value)?))
    }

    fn level_of(&self, value: f64) -> Result<u64> {
        if !self.contains(value) {
            return Err(GaError::Domain {
                value,
                low: self.low,
                high: self.high,
            });
        }
        let levels = self.levels();
        let scaled = ((value - self.low) * levels as f64 / (self.high - self.low)).round();
        Ok((scaled as u64).min(levels - 1))
    }

    // Scaling by a power of two keeps grid points exact where the span allows.
    fn level_value(&self, level: u64) -> f64 {
        self.low + (self.high - self.low) * level as f64 / self.levels() as f64
    }
}

/// Converts `value` to a big-endian bit vector of `width` bits.
///
/// Bits above `width` are discarded.
pub fn uint_to_bits(value: u64, width: usize) -> Vec<bool> {
    let mut bits = vec![false; width];
    write_uint(value, &mut bits);
    bits
}

/// Interprets a big-endian bit slice as an unsigned integer.
///
/// # Panics
/// Panics if the slice is longer than 64 bits.
pub fn bits_to_uint(bits: &[bool]) -> u64 {
    assert!(bits.len() <= 64, "cannot pack more than 64 bits into u64");
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | b as u64)
}

fn write_uint(mut value: u64, out: &mut [bool]) {
    for bit in out.iter_mut().rev() {
        *bit = value & 1 == 1;
        value >>= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_uint_roundtrip_msb_first() {
        assert_eq!(uint_to_bits(5, 4), bits("0101"));
        assert_eq!(bits_to_uint(&bits("0101")), 5);
        assert_eq!(uint_to_bits(512, 10), bits("1000000000"));
    }

    #[test]
    fn test_uint_truncates_high_bits() {
        assert_eq!(uint_to_bits(0b1_0011, 4), bits("0011"));
    }

    #[test]
    fn test_zero_encodes_to_midpoint() {
        let codec = FixedWidthCodec::new(-5.12, 5.12, 10);
        let encoded = codec.encode(0.0).unwrap();
        assert_eq!(encoded, bits("1000000000"));
        assert_eq!(bits_to_uint(&encoded), 512);
        assert_eq!(codec.decode(&encoded), 0.0);
    }

    #[test]
    fn test_precision_matches_grid() {
        let codec = FixedWidthCodec::new(-5.12, 5.12, 10);
        assert!((codec.precision() - 0.01).abs() < 1e-12);
        assert!((codec.max_value() - 5.11).abs() < 1e-9);
        let alt = (codec.max_value() - codec.low()) / (codec.levels() - 1) as f64;
        assert!((alt - codec.precision()).abs() < 1e-12);
    }

    #[test]
    fn test_low_encodes_to_zero() {
        let codec = FixedWidthCodec::new(-65.536, 65.536, 17);
        let encoded = codec.encode(-65.536).unwrap();
        assert_eq!(encoded.len(), 17);
        assert!(encoded.iter().all(|&b| !b));
    }

    #[test]
    fn test_high_is_rejected() {
        let codec = FixedWidthCodec::new(-1.28, 1.28, 8);
        assert!(matches!(codec.encode(1.28), Err(GaError::Domain { .. })));
        assert!(matches!(codec.encode(-1.29), Err(GaError::Domain { .. })));
        assert!(codec.encode(f64::NAN).is_err());
    }

    #[test]
    fn test_top_half_step_saturates() {
        let codec = FixedWidthCodec::new(0.0, 1.0, 2);
        // levels 0, .25, .5, .75; .9 would round to 4
        let encoded = codec.encode(0.9).unwrap();
        assert_eq!(encoded, bits("11"));
        assert_eq!(codec.decode(&encoded), 0.75);
    }

    #[test]
    fn test_roundtrip_sweep_within_half_step() {
        let codec = FixedWidthCodec::new(-2.048, 2.048, 12);
        let half = codec.precision() / 2.0 + 1e-12;
        let mut x = codec.low();
        while x <= codec.max_value() {
            let back = codec.decode(&codec.encode(x).unwrap());
            assert!((back - x).abs() <= half, "{x} -> {back}");
            x += 0.0007;
        }
    }

    #[test]
    fn test_clamp_and_quantize() {
        let codec = FixedWidthCodec::new(0.0, 102.4, 10);
        assert_eq!(codec.clamp(200.0), codec.max_value());
        assert_eq!(codec.clamp(-1.0), 0.0);
        let q = codec.quantize(8.04).unwrap();
        assert!((q - 8.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "codec expects exactly 10 bits")]
    fn test_decode_wrong_width_panics() {
        let codec = FixedWidthCodec::new(-5.12, 5.12, 10);
        codec.decode(&[true; 9]);
    }

    #[test]
    #[should_panic(expected = "codec width must be in")]
    fn test_zero_width_panics() {
        FixedWidthCodec::new(0.0, 1.0, 0);
    }
}
