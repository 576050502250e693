// Double-width unsigned integer composed of (lower, upper) halves.
//
// `FixedWidth<H>` holds two values of the half type `H` and represents
// `upper * 2^H::BITS + lower`. Because `FixedWidth<H>` is itself a `Word`
// whenever `H` is, the composition nests: `FixedWidth<FixedWidth<u32>>` is a
// 128-bit integer, one more level gives 256 bits, and so on. Every operation
// below is written only in terms of the `Word` operations of the halves, so
// it holds at every nesting depth.
//
// Arithmetic wraps modulo 2^BITS, exactly like the native unsigned types'
// `wrapping_*` methods. Division by zero panics.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::mul;
use crate::word::Word;

/// Unsigned integer of `2 * H::BITS` bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedWidth<H> {
    /// Least significant half.
    pub lower: H,
    /// Most significant half.
    pub upper: H,
}

/// 16-bit integer over native bytes.
pub type U16 = FixedWidth<u8>;
/// 32-bit integer over native `u16` halves.
pub type U32 = FixedWidth<u16>;
/// 64-bit integer over native `u32` halves.
pub type U64 = FixedWidth<u32>;
pub type U128 = FixedWidth<U64>;
pub type U256 = FixedWidth<U128>;
pub type U512 = FixedWidth<U256>;
pub type U1024 = FixedWidth<U512>;
pub type U2048 = FixedWidth<U1024>;
pub type U4096 = FixedWidth<U2048>;

impl<H> FixedWidth<H> {
    #[inline]
    pub const fn from_halves(lower: H, upper: H) -> Self {
        Self { lower, upper }
    }
}

impl<H: Word> FixedWidth<H> {
    pub const ZERO: Self = Self::from_halves(H::ZERO, H::ZERO);
    pub const ONE: Self = Self::from_halves(H::ONE, H::ZERO);
    pub const MAX: Self = Self::from_halves(H::MAX, H::MAX);
    pub const BITS: u32 = 2 * H::BITS;
}

impl<H: Word> Word for FixedWidth<H> {
    const BITS: u32 = 2 * H::BITS;
    const ZERO: Self = Self::from_halves(H::ZERO, H::ZERO);
    const ONE: Self = Self::from_halves(H::ONE, H::ZERO);
    const MAX: Self = Self::from_halves(H::MAX, H::MAX);

    #[inline]
    fn from_u64(value: u64) -> Self {
        let upper = if H::BITS >= u64::BITS {
            H::ZERO
        } else {
            H::from_u64(value >> H::BITS)
        };
        Self::from_halves(H::from_u64(value), upper)
    }

    #[inline]
    fn low_u64(self) -> u64 {
        if H::BITS >= u64::BITS {
            self.lower.low_u64()
        } else {
            self.lower.low_u64() | (self.upper.low_u64() << H::BITS)
        }
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        let lower = self.lower.wrapping_add(rhs.lower);
        let mut upper = self.upper.wrapping_add(rhs.upper);
        if lower < self.lower {
            upper = upper.wrapping_inc();
        }
        Self { lower, upper }
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        let lower = self.lower.wrapping_sub(rhs.lower);
        let mut upper = self.upper.wrapping_sub(rhs.upper);
        if lower > self.lower {
            upper = upper.wrapping_dec();
        }
        Self { lower, upper }
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        mul::truncating_mul(self, rhs)
    }

    fn logical_shl(self, shift: u32) -> Self {
        let h = H::BITS;
        if shift == 0 {
            self
        } else if shift < h {
            Self {
                lower: self.lower.logical_shl(shift),
                upper: self.upper.logical_shl(shift) | self.lower.logical_shr(h - shift),
            }
        } else if shift < 2 * h {
            Self {
                lower: H::ZERO,
                upper: self.lower.logical_shl(shift - h),
            }
        } else {
            Self::ZERO
        }
    }

    fn logical_shr(self, shift: u32) -> Self {
        let h = H::BITS;
        if shift == 0 {
            self
        } else if shift < h {
            Self {
                lower: self.lower.logical_shr(shift) | self.upper.logical_shl(h - shift),
                upper: self.upper.logical_shr(shift),
            }
        } else if shift < 2 * h {
            Self {
                lower: self.upper.logical_shr(shift - h),
                upper: H::ZERO,
            }
        } else {
            Self::ZERO
        }
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        if self.upper.is_zero() {
            H::BITS + self.lower.leading_zeros()
        } else {
            self.upper.leading_zeros()
        }
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.lower.is_zero() && self.upper.is_zero()
    }

    #[inline]
    fn widening_mul(self, rhs: Self) -> FixedWidth<Self> {
        mul::schoolbook_widening(self, rhs)
    }

    #[inline]
    fn div_rem(self, divisor: Self) -> (Self, Self) {
        H::wide_div_rem(self, divisor)
    }
}

impl<H: Word> From<u64> for FixedWidth<H> {
    #[inline]
    fn from(value: u64) -> Self {
        <Self as Word>::from_u64(value)
    }
}

impl<H: Word> PartialOrd for FixedWidth<H> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Word> Ord for FixedWidth<H> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.upper
            .cmp(&other.upper)
            .then_with(|| self.lower.cmp(&other.lower))
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<H: Word> Not for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_halves(!self.lower, !self.upper)
    }
}

macro_rules! impl_bitwise {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl<H: Word> $trait for FixedWidth<H> {
                type Output = Self;
                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::from_halves(self.lower $op rhs.lower, self.upper $op rhs.upper)
                }
            }
        )*
    };
}

impl_bitwise! {
    BitAnd, bitand, &;
    BitOr, bitor, |;
    BitXor, bitxor, ^;
}

impl<H: Word> Add for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<H: Word> Sub for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl<H: Word> Mul for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl<H: Word> Div for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        H::wide_quotient(self, rhs)
    }
}

impl<H: Word> Rem for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        H::wide_remainder(self, rhs)
    }
}

impl<H: Word> Shl<u32> for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn shl(self, shift: u32) -> Self {
        self.logical_shl(shift)
    }
}

impl<H: Word> Shr<u32> for FixedWidth<H> {
    type Output = Self;
    #[inline]
    fn shr(self, shift: u32) -> Self {
        self.logical_shr(shift)
    }
}

macro_rules! impl_assign {
    ($($trait:ident, $method:ident, $op:tt, $rhs:ty);* $(;)?) => {
        $(
            impl<H: Word> $trait<$rhs> for FixedWidth<H> {
                #[inline]
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign! {
    AddAssign, add_assign, +, Self;
    SubAssign, sub_assign, -, Self;
    MulAssign, mul_assign, *, Self;
    DivAssign, div_assign, /, Self;
    RemAssign, rem_assign, %, Self;
    BitAndAssign, bitand_assign, &, Self;
    BitOrAssign, bitor_assign, |, Self;
    BitXorAssign, bitxor_assign, ^, Self;
    ShlAssign, shl_assign, <<, u32;
    ShrAssign, shr_assign, >>, u32;
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

// Hex output always spans the full width, upper half first, so nested halves
// line up without separators.
impl<H: Word> fmt::LowerHex for FixedWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (H::BITS / 4) as usize;
        write!(f, "{:0digits$x}{:0digits$x}", self.upper, self.lower)
    }
}

impl<H: Word> fmt::UpperHex for FixedWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (H::BITS / 4) as usize;
        write!(f, "{:0digits$X}{:0digits$X}", self.upper, self.lower)
    }
}

impl<H: Word> fmt::Display for FixedWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<H: Word> fmt::Debug for FixedWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedWidth<{}>(0x{:x})", Self::BITS, self)
    }
}
