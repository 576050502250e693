// Deterministic random words for tests and benchmarks.
//
// Seeded from a u64 so failures reproduce. Values wider than 64 bits are
// assembled limb by limb through the `Word` shift operations, so the same
// generator serves every composed width.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::word::Word;

/// Seeded source of test operands.
pub struct DebugRng {
    inner: StdRng,
}

impl DebugRng {
    pub fn new(seed: u64) -> Self {
        let inner = StdRng::seed_from_u64(seed);
        Self { inner }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.random()
    }

    /// Uniform value in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.inner.random_range(0..bound)
    }

    /// Uniformly random value across the full width of `T`.
    pub fn word<T: Word>(&mut self) -> T {
        let limbs = T::BITS.div_ceil(u64::BITS);
        (0..limbs).fold(T::ZERO, |acc, _| {
            acc.logical_shl(u64::BITS) | T::from_u64(self.inner.random())
        })
    }

    /// Random value with at most `bits` significant bits.
    ///
    /// Mixing magnitudes matters for division tests: full-width operands
    /// almost always produce a quotient of 0 or 1.
    pub fn word_with_bits<T: Word>(&mut self, bits: u32) -> T {
        if bits == 0 {
            return T::ZERO;
        }
        self.word::<T>().logical_shr(T::BITS - bits.min(T::BITS))
    }
}
