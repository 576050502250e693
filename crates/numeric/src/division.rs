// Bit-serial division for any `Word`.
//
// These are the generic paths behind `/`, `%` and `div_rem` on composed
// widths. They need nothing beyond shift, compare, subtract and a single-bit
// set, so they work at any width without a native wide divide. Native words
// bypass them (see `Word::wide_quotient` and friends), and the tests below
// pin both paths to the same results.

use crate::uintx::FixedWidth;
use crate::word::Word;

/// Restoring long division, most significant bit first. Returns the quotient.
///
/// # Panics
///
/// If `divisor` is zero.
pub fn restoring_quotient<T: Word>(mut dividend: T, divisor: T) -> T {
    assert!(divisor.is_nonzero(), "division by zero");
    let mut quotient = T::ZERO;
    for shift in (0..T::BITS).rev() {
        if dividend.logical_shr(shift) >= divisor {
            dividend = dividend.wrapping_sub(divisor.logical_shl(shift));
            quotient = quotient.with_bit_set(shift);
        }
    }
    quotient
}

/// Restoring long division returning only the remainder.
///
/// # Panics
///
/// If `divisor` is zero.
pub fn restoring_remainder<T: Word>(mut dividend: T, divisor: T) -> T {
    assert!(divisor.is_nonzero(), "division by zero");
    for shift in (0..T::BITS).rev() {
        if dividend.logical_shr(shift) >= divisor {
            dividend = dividend.wrapping_sub(divisor.logical_shl(shift));
        }
    }
    dividend
}

/// Quotient and remainder in a single pass.
///
/// Dividend bits are shifted one at a time into a running remainder; the
/// divisor is subtracted whenever the remainder reaches it. The remainder
/// never exceeds `dividend >> shift`, so the shift cannot overflow.
///
/// # Panics
///
/// If `divisor` is zero.
pub fn long_div_rem<T: Word>(dividend: T, divisor: T) -> (T, T) {
    assert!(divisor.is_nonzero(), "division by zero");
    let mut quotient = T::ZERO;
    let mut remainder = T::ZERO;
    for shift in (0..T::BITS).rev() {
        remainder = remainder.logical_shl(1) | (dividend.logical_shr(shift) & T::ONE);
        if remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient = quotient.with_bit_set(shift);
        }
    }
    (quotient, remainder)
}

/// Combined division: quotient in the lower half, remainder in the upper.
///
/// # Panics
///
/// If `divisor` is zero.
#[inline]
pub fn div<T: Word>(dividend: T, divisor: T) -> FixedWidth<T> {
    let (quotient, remainder) = dividend.div_rem(divisor);
    FixedWidth::from_halves(quotient, remainder)
}
