// Reliability sequence error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReliabilityError {
    #[error("design numerator {numerator} exceeds denominator {denominator}")]
    NumeratorExceedsDenominator { numerator: u64, denominator: u64 },

    #[error("design denominator must be non-zero")]
    ZeroDenominator,

    #[error("order {order} out of range (must be {min}..={max})")]
    OrderOutOfRange { order: u32, min: u32, max: u32 },

    #[error("numerator {numerator} needs {bits} bits, working width holds {max_bits}")]
    NumeratorTooWide { numerator: u64, bits: u32, max_bits: u32 },

    #[error("denominator {denominator} needs {bits} bits, working width holds {max_bits}")]
    DenominatorTooWide { denominator: u64, bits: u32, max_bits: u32 },

    #[error("sequence length {0} is not a power of two")]
    LengthNotPowerOfTwo(usize),

    #[error("sequence of length {len} is not a permutation of 0..{len}")]
    NotAPermutation { len: usize },
}

pub type Result<T> = std::result::Result<T, ReliabilityError>;
