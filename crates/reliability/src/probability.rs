// Erasure probabilities of synthesized bit-channels.
//
// A binary erasure channel with erasure probability p splits into two
// channels: the "minus" channel erases with 2p - p^2, the "plus" channel
// with p^2. `ErasureProbability` abstracts the representation so the same
// recursion runs over exact fixed-point integers or over f64 as a reference.
//
// Fixed-point layout: a `FixedWidth<H>` of `BITS` bits represents
// value / 2^(BITS-1), so 1.0 is exactly 2^(BITS-1) and the top bit is the
// integer part.

use std::cmp::Ordering;
use std::fmt::Debug;

use polseq_numeric::{mul, FixedWidth, Word};

/// A probability representation the reliability recursion can run over.
pub trait ErasureProbability: Copy + Debug + Send + Sync + 'static {
    /// Bit width of the representation, reported in diagnostics.
    const WIDTH_BITS: u32;

    /// Widest numerator or denominator, in bits, `from_ratio` accepts.
    const MAX_OPERAND_BITS: u32;

    /// `numerator / denominator` in this representation.
    ///
    /// Requires `numerator <= denominator`, `denominator != 0` and both
    /// operands within `MAX_OPERAND_BITS`.
    fn from_ratio(numerator: u64, denominator: u64) -> Self;

    /// Erasure probabilities of the two synthesized channels,
    /// `(2p - p^2, p^2)`.
    fn polarize(self) -> (Self, Self);

    /// Total order on probabilities.
    fn compare(&self, other: &Self) -> Ordering;

    fn is_zero_probability(&self) -> bool;

    /// Approximate value, for logging and cross-checks.
    fn to_f64(&self) -> f64;
}

impl<H: Word> ErasureProbability for FixedWidth<H> {
    const WIDTH_BITS: u32 = Self::BITS;
    const MAX_OPERAND_BITS: u32 = if Self::BITS < u64::BITS { Self::BITS } else { u64::BITS };

    fn from_ratio(numerator: u64, denominator: u64) -> Self {
        // floor(numerator * 2^(BITS-1) / denominator), divided in double
        // width so every quotient bit survives. numerator <= denominator
        // keeps the quotient within the lower half.
        let scaled = FixedWidth::<Self>::from_u64(numerator) << (Self::BITS - 1);
        (scaled / FixedWidth::<Self>::from_u64(denominator)).lower
    }

    fn polarize(self) -> (Self, Self) {
        // p^2 carries 2(BITS-1) fractional bits; one extra shift puts the
        // product's 1.0 position at the top of the upper half.
        let square = (mul(self, self) << 1).upper;
        // `self << 1` wraps to zero at 1.0, and 0 - 1.0 wraps back to 1.0.
        ((self << 1) - square, square)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_zero_probability(&self) -> bool {
        Word::is_zero(*self)
    }

    fn to_f64(&self) -> f64 {
        let shift = Self::BITS.saturating_sub(u64::BITS);
        let top = self.logical_shr(shift).low_u64();
        top as f64 / 2f64.powi((Self::BITS - shift - 1) as i32)
    }
}

impl ErasureProbability for f64 {
    const WIDTH_BITS: u32 = 64;
    const MAX_OPERAND_BITS: u32 = u64::BITS;

    fn from_ratio(numerator: u64, denominator: u64) -> Self {
        numerator as f64 / denominator as f64
    }

    fn polarize(self) -> (Self, Self) {
        let square = self * self;
        (2.0 * self - square, square)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn is_zero_probability(&self) -> bool {
        *self == 0.0
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}
