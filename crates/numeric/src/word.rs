// Unsigned word abstraction shared by native integers and composed widths.
//
// `Word` is the only contract `FixedWidth<H>` needs from its half type `H`.
// The native unsigned integers implement it directly; `FixedWidth<H>`
// implements it again on top of `H`, which is what lets widths double
// indefinitely (u32 -> 64 -> 128 -> ... bits) by composition alone.
//
// Division of a double-width value is routed through the `wide_*` hooks.
// Their default bodies are the bit-serial algorithms in `division`; native
// words override them with a single native double-width divide.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::division;
use crate::uintx::FixedWidth;

/// Fixed-width unsigned integer with wrapping (modulo `2^BITS`) arithmetic.
///
/// Every operation is total except the division family, which panics on a
/// zero divisor.
pub trait Word:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Total bit width.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Construct from a `u64`, truncating to `BITS` when narrower.
    fn from_u64(value: u64) -> Self;

    /// The low 64 bits (zero-extended when narrower).
    fn low_u64(self) -> u64;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Same-width product, truncated to `BITS`.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Logical left shift. Shifts of `BITS` or more yield zero.
    fn logical_shl(self, shift: u32) -> Self;

    /// Logical right shift. Shifts of `BITS` or more yield zero.
    fn logical_shr(self, shift: u32) -> Self;

    /// Number of leading zero bits (`BITS` for zero).
    fn leading_zeros(self) -> u32;

    /// Full product in twice the width.
    fn widening_mul(self, rhs: Self) -> FixedWidth<Self>;

    /// Quotient and remainder. Panics if `divisor` is zero.
    fn div_rem(self, divisor: Self) -> (Self, Self);

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Copy of `self` with bit `index` set.
    #[inline]
    fn with_bit_set(self, index: u32) -> Self {
        self | Self::ONE.logical_shl(index)
    }

    #[inline]
    fn bit(self, index: u32) -> bool {
        (self.logical_shr(index) & Self::ONE).is_nonzero()
    }

    /// Position of the highest set bit plus one (0 for zero).
    #[inline]
    fn significant_bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    #[inline]
    fn wrapping_inc(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    #[inline]
    fn wrapping_dec(self) -> Self {
        self.wrapping_sub(Self::ONE)
    }

    /// Quotient of a double-width division.
    fn wide_quotient(dividend: FixedWidth<Self>, divisor: FixedWidth<Self>) -> FixedWidth<Self> {
        division::restoring_quotient(dividend, divisor)
    }

    /// Remainder of a double-width division.
    fn wide_remainder(dividend: FixedWidth<Self>, divisor: FixedWidth<Self>) -> FixedWidth<Self> {
        division::restoring_remainder(dividend, divisor)
    }

    /// Quotient and remainder of a double-width division in one pass.
    fn wide_div_rem(
        dividend: FixedWidth<Self>,
        divisor: FixedWidth<Self>,
    ) -> (FixedWidth<Self>, FixedWidth<Self>) {
        division::long_div_rem(dividend, divisor)
    }
}

macro_rules! impl_native_word {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn low_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn logical_shl(self, shift: u32) -> Self {
                    <$t>::checked_shl(self, shift).unwrap_or(0)
                }

                #[inline]
                fn logical_shr(self, shift: u32) -> Self {
                    <$t>::checked_shr(self, shift).unwrap_or(0)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn widening_mul(self, rhs: Self) -> FixedWidth<Self> {
                    FixedWidth::<$t>::from_native(self as $wide * rhs as $wide)
                }

                #[inline]
                fn div_rem(self, divisor: Self) -> (Self, Self) {
                    assert!(divisor != 0, "division by zero");
                    (self / divisor, self % divisor)
                }

                #[inline]
                fn wide_quotient(dividend: FixedWidth<Self>, divisor: FixedWidth<Self>) -> FixedWidth<Self> {
                    let divisor = divisor.to_native();
                    assert!(divisor != 0, "division by zero");
                    FixedWidth::<$t>::from_native(dividend.to_native() / divisor)
                }

                #[inline]
                fn wide_remainder(dividend: FixedWidth<Self>, divisor: FixedWidth<Self>) -> FixedWidth<Self> {
                    let divisor = divisor.to_native();
                    assert!(divisor != 0, "division by zero");
                    FixedWidth::<$t>::from_native(dividend.to_native() % divisor)
                }

                #[inline]
                fn wide_div_rem(
                    dividend: FixedWidth<Self>,
                    divisor: FixedWidth<Self>,
                ) -> (FixedWidth<Self>, FixedWidth<Self>) {
                    let (dividend, divisor) = (dividend.to_native(), divisor.to_native());
                    assert!(divisor != 0, "division by zero");
                    (
                        FixedWidth::<$t>::from_native(dividend / divisor),
                        FixedWidth::<$t>::from_native(dividend % divisor),
                    )
                }
            }

            impl FixedWidth<$t> {
                /// Split a native double-width integer into halves.
                #[inline]
                pub const fn from_native(value: $wide) -> Self {
                    Self {
                        lower: value as $t,
                        upper: (value >> <$t>::BITS) as $t,
                    }
                }

                /// Reassemble the halves into the native double-width integer.
                #[inline]
                pub const fn to_native(self) -> $wide {
                    ((self.upper as $wide) << <$t>::BITS) | self.lower as $wide
                }
            }
        )*
    };
}

impl_native_word!(u8 => u16, u16 => u32, u32 => u64, u64 => u128);
