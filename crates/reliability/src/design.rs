// Design point: the erasure probability of the underlying channel, kept as
// an exact rational until it is lifted into a working precision.

use std::fmt;

use polseq_numeric::bitop::bit_length;

use crate::error::{ReliabilityError, Result};
use crate::probability::ErasureProbability;

/// Validated rational `numerator / denominator` with `0 < denominator` and
/// `numerator <= denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DesignPoint {
    numerator: u64,
    denominator: u64,
}

impl DesignPoint {
    /// Erasure probability 1/2.
    pub const HALF: Self = Self { numerator: 1, denominator: 2 };

    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(ReliabilityError::ZeroDenominator);
        }
        if numerator > denominator {
            return Err(ReliabilityError::NumeratorExceedsDenominator { numerator, denominator });
        }
        Ok(Self { numerator, denominator })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Whether the channel erases nothing.
    pub fn is_noiseless(&self) -> bool {
        self.numerator == 0
    }

    /// Check that both operands fit a representation that accepts
    /// `max_bits`-bit integers.
    pub fn check_width(&self, max_bits: u32) -> Result<()> {
        let bits = bit_length(self.numerator);
        if bits > max_bits {
            return Err(ReliabilityError::NumeratorTooWide {
                numerator: self.numerator,
                bits,
                max_bits,
            });
        }
        let bits = bit_length(self.denominator);
        if bits > max_bits {
            return Err(ReliabilityError::DenominatorTooWide {
                denominator: self.denominator,
                bits,
                max_bits,
            });
        }
        Ok(())
    }

    /// The design probability in precision `P`.
    ///
    /// Callers must have checked `P::MAX_OPERAND_BITS` with `check_width`.
    pub fn erasure_probability<P: ErasureProbability>(&self) -> P {
        P::from_ratio(self.numerator, self.denominator)
    }
}

impl Default for DesignPoint {
    fn default() -> Self {
        Self::HALF
    }
}

impl fmt::Display for DesignPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
