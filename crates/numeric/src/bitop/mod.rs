// Bit manipulation utilities on native integers.
//
// Small helpers used where a plain machine integer describes the problem
// size or an input numerator, before any value is lifted into a `Word`.

/// Index of the highest set bit; 0 for both 0 and 1.
#[inline]
pub fn get_msb64(val: u64) -> u32 {
    val.checked_ilog2().unwrap_or(0)
}

#[inline]
pub fn is_power_of_two(val: u64) -> bool {
    val.is_power_of_two()
}

/// `log2(len)` when `len` is an exact power of two.
#[inline]
pub fn exact_log2(len: u64) -> Option<u32> {
    is_power_of_two(len).then(|| get_msb64(len))
}

/// Number of bits needed to represent `val` (0 for 0).
#[inline]
pub fn bit_length(val: u64) -> u32 {
    u64::BITS - val.leading_zeros()
}
