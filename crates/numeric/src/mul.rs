// Multiplication for composed widths.
//
// Both products split the operands into halves and recurse into the halves'
// own `widening_mul`. The recursion bottoms out at a native word, where the
// widening product is one native double-width multiply.

use crate::uintx::FixedWidth;
use crate::word::Word;

/// Full product of two values in twice their width.
///
/// Generic over every `Word`, native or composed.
#[inline]
pub fn mul<T: Word>(a: T, b: T) -> FixedWidth<T> {
    a.widening_mul(b)
}

/// Schoolbook widening product of two composed values.
///
/// With `h = H::BITS`:
/// `a * b = ll + (lu + ul) * 2^h + uu * 2^2h`, where the middle sum may carry
/// into bit `2h` and that carry lands at bit `3h` of the result.
pub(crate) fn schoolbook_widening<H: Word>(
    a: FixedWidth<H>,
    b: FixedWidth<H>,
) -> FixedWidth<FixedWidth<H>> {
    let h = H::BITS;
    let low = a.lower.widening_mul(b.lower);
    let high = a.upper.widening_mul(b.upper);
    let cross = a.lower.widening_mul(b.upper);
    let middle = cross.wrapping_add(a.upper.widening_mul(b.lower));

    let middle_low = middle.logical_shl(h);
    let lower = low.wrapping_add(middle_low);
    let mut upper = high.wrapping_add(middle.logical_shr(h));
    if lower < middle_low {
        upper = upper.wrapping_inc();
    }
    if middle < cross {
        upper = upper.wrapping_add(FixedWidth::from_halves(H::ZERO, H::ONE));
    }
    FixedWidth::from_halves(lower, upper)
}

/// Same-width product, truncated to `2 * H::BITS`.
///
/// Equal to `schoolbook_widening(a, b).lower`, but only the low product is
/// widened: the cross terms are needed modulo `2^h` and `upper * upper` falls
/// entirely outside the result.
#[inline]
pub(crate) fn truncating_mul<H: Word>(a: FixedWidth<H>, b: FixedWidth<H>) -> FixedWidth<H> {
    let low = a.lower.widening_mul(b.lower);
    let cross = a
        .lower
        .wrapping_mul(b.upper)
        .wrapping_add(a.upper.wrapping_mul(b.lower));
    FixedWidth::from_halves(low.lower, low.upper.wrapping_add(cross))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uintx::{U128, U16, U32, U64};

    #[test]
    fn widening_matches_native_u64_product() {
        let cases = [
            (0u32, 0u32),
            (1, u32::MAX),
            (u32::MAX, u32::MAX),
            (0x8000_0000, 0x8000_0000),
            (0x1234_5678, 0x9ABC_DEF0),
        ];
        for (x, y) in cases {
            let a = U32::from_native(x);
            let b = U32::from_native(y);
            let wide = mul(a, b);
            assert_eq!(wide.lower.to_native() as u64 | (wide.upper.to_native() as u64) << 32, x as u64 * y as u64);
        }
    }

    #[test]
    fn widening_keeps_middle_carry() {
        // Both cross products near 2^128 overflow the middle sum.
        let a = U128::MAX;
        let wide = mul(a, a);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(wide.lower, U128::ONE);
        assert_eq!(wide.upper, U128::MAX - U128::ONE);
    }

    #[test]
    fn truncating_equals_low_half_of_widening() {
        let a = U64::from_native(0xFFFF_FFFF_0000_0001);
        let b = U64::from_native(0x0000_0002_FFFF_FFFF);
        assert_eq!(a * b, mul(a, b).lower);
        assert_eq!((a * b).to_native(), 0xFFFF_FFFF_0000_0001u64.wrapping_mul(0x0000_0002_FFFF_FFFF));
    }

    #[test]
    fn sixteen_bit_exhaustive_rows() {
        for x in (0..=u16::MAX).step_by(97) {
            for y in (0..=u16::MAX).step_by(89) {
                let product = U16::from_native(x) * U16::from_native(y);
                assert_eq!(product.to_native(), x.wrapping_mul(y));
            }
        }
    }
}
