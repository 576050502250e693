// Reliability sequence: the ranked leaf positions of a polar code.
//
// The sequence lists positions from least to most reliable, so the first
// `k` entries are the positions to freeze and the rest carry information.

use tracing::{debug, warn};

use polseq_numeric::bitop::exact_log2;

use crate::design::DesignPoint;
use crate::error::{ReliabilityError, Result};
use crate::probability::ErasureProbability;
use crate::ranking::rank_descending;
use crate::recursion::leaf_probabilities;

/// Smallest supported code order (block length 2).
pub const MIN_ORDER: u32 = 1;
/// Largest supported code order (block length 2^24).
pub const MAX_ORDER: u32 = 24;

/// Leaf positions ordered by descending erasure probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReliabilitySequence {
    positions: Vec<usize>,
}

impl ReliabilitySequence {
    /// Compute the sequence for block length `2^order` at design erasure
    /// probability `numerator / denominator`, in precision `P`.
    ///
    /// # Panics
    ///
    /// On any input `try_compute` rejects.
    pub fn compute<P: ErasureProbability>(order: u32, numerator: u64, denominator: u64) -> Self {
        match Self::try_compute::<P>(order, numerator, denominator) {
            Ok(sequence) => sequence,
            Err(err) => panic!("invalid reliability sequence request: {err}"),
        }
    }

    pub fn try_compute<P: ErasureProbability>(
        order: u32,
        numerator: u64,
        denominator: u64,
    ) -> Result<Self> {
        let design = DesignPoint::new(numerator, denominator)?;
        Self::from_design::<P>(order, design)
    }

    pub fn from_design<P: ErasureProbability>(order: u32, design: DesignPoint) -> Result<Self> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(ReliabilityError::OrderOutOfRange { order, min: MIN_ORDER, max: MAX_ORDER });
        }
        design.check_width(P::MAX_OPERAND_BITS)?;

        debug!(order, %design, width = P::WIDTH_BITS, "computing reliability sequence");
        let probabilities = leaf_probabilities(design.erasure_probability::<P>(), order);

        if !design.is_noiseless() {
            let collapsed = probabilities.iter().filter(|p| p.is_zero_probability()).count();
            if collapsed > 0 {
                warn!(
                    order,
                    %design,
                    width = P::WIDTH_BITS,
                    collapsed,
                    "leaf probabilities underflowed to zero; ranking among them falls back to index order"
                );
            }
        }

        let positions = rank_descending(&probabilities);
        debug!(len = positions.len(), "reliability sequence ranked");
        Ok(Self { positions })
    }

    /// Wrap an existing ordering, checking that it is a permutation of
    /// `0..2^order` with `order` in `MIN_ORDER..=MAX_ORDER`.
    pub fn from_positions(positions: Vec<usize>) -> Result<Self> {
        let len = positions.len();
        let order = exact_log2(len as u64).ok_or(ReliabilityError::LengthNotPowerOfTwo(len))?;
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(ReliabilityError::OrderOutOfRange { order, min: MIN_ORDER, max: MAX_ORDER });
        }
        let sequence = Self { positions };
        if !sequence.is_permutation() {
            return Err(ReliabilityError::NotAPermutation { len });
        }
        Ok(sequence)
    }

    /// Block length.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `log2` of the block length.
    pub fn order(&self) -> u32 {
        exact_log2(self.positions.len() as u64).unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.positions.iter()
    }

    /// Every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.positions.len()];
        self.positions.iter().all(|&position| match seen.get_mut(position) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }

    /// The `k` least reliable positions.
    ///
    /// # Panics
    ///
    /// If `k > len()`.
    pub fn frozen(&self, k: usize) -> &[usize] {
        &self.positions[..k]
    }

    /// The positions left for information bits once `k` are frozen.
    ///
    /// # Panics
    ///
    /// If `k > len()`.
    pub fn information(&self, k: usize) -> &[usize] {
        &self.positions[k..]
    }
}

impl AsRef<[usize]> for ReliabilitySequence {
    fn as_ref(&self) -> &[usize] {
        &self.positions
    }
}

impl<'a> IntoIterator for &'a ReliabilitySequence {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl From<ReliabilitySequence> for Vec<usize> {
    fn from(sequence: ReliabilitySequence) -> Self {
        sequence.positions
    }
}
