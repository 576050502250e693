// Conversions between `Word` values and `crypto_bigint::Uint`.
//
// crypto-bigint stores `LIMBS` 64-bit words in little-endian limb order
// (`as_words()[0]` is least significant). Conversions go limb by limb through
// `Word` shifts, so they work for any width, native or composed. Bits beyond
// the destination width are dropped.
//
// Assumes a 64-bit target, where `crypto_bigint::Word` is `u64`.

use crypto_bigint::Uint;

use crate::word::Word;

/// Interop methods available on every `Word`.
pub trait UintInterop: Word {
    /// Copy into a crypto-bigint integer of `LIMBS` 64-bit limbs.
    fn to_uint<const LIMBS: usize>(self) -> Uint<LIMBS> {
        let mut words = [0u64; LIMBS];
        for (index, word) in words.iter_mut().enumerate() {
            *word = self.logical_shr(u64::BITS * index as u32).low_u64();
        }
        Uint::from_words(words)
    }

    /// Build from a crypto-bigint integer, truncating to `Self::BITS`.
    fn from_uint<const LIMBS: usize>(value: &Uint<LIMBS>) -> Self {
        value
            .as_words()
            .iter()
            .enumerate()
            .fold(Self::ZERO, |acc, (index, &word)| {
                acc | Self::from_u64(word).logical_shl(u64::BITS * index as u32)
            })
    }
}

impl<T: Word> UintInterop for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::DebugRng;
    use crate::uintx::{U128, U256, U64};
    use crypto_bigint::U256 as Reference;

    fn random_pair(rng: &mut DebugRng) -> (U256, Reference) {
        let bits = rng.below(256) as u32 + 1;
        let value: U256 = rng.word_with_bits(bits);
        (value, value.to_uint())
    }

    #[test]
    fn limb_order_is_little_endian() {
        let value = U256::from_u64(1).logical_shl(64 * 3 + 5);
        let reference: Reference = value.to_uint();
        assert_eq!(reference.as_words(), &[0, 0, 0, 1 << 5]);
        assert_eq!(U256::from_uint(&reference), value);
    }

    #[test]
    fn narrow_words_truncate() {
        let reference = Reference::from_words([u64::MAX, u64::MAX, 0, 0]);
        assert_eq!(U64::from_uint(&reference), U64::MAX);
        assert_eq!(U128::from_uint(&reference), U128::MAX);
        assert_eq!(<u8 as UintInterop>::from_uint(&reference), u8::MAX);
    }

    #[test]
    fn u256_add_sub_mul_match_reference() {
        let mut rng = DebugRng::new(256);
        for _ in 0..500 {
            let (a, ra) = random_pair(&mut rng);
            let (b, rb) = random_pair(&mut rng);
            assert_eq!((a + b).to_uint::<4>(), ra.wrapping_add(&rb));
            assert_eq!((a - b).to_uint::<4>(), ra.wrapping_sub(&rb));
            assert_eq!((a * b).to_uint::<4>(), ra.wrapping_mul(&rb));
            assert_eq!(a.cmp(&b), ra.cmp(&rb));
        }
    }

    #[test]
    fn u256_widening_mul_matches_reference() {
        let mut rng = DebugRng::new(512);
        for _ in 0..200 {
            let (a, ra) = random_pair(&mut rng);
            let (b, rb) = random_pair(&mut rng);
            let wide = a.widening_mul(b);
            let reference: crypto_bigint::U512 = ra.widening_mul(&rb);
            let (lo, hi): (Reference, Reference) = reference.split();
            assert_eq!(wide.lower.to_uint::<4>(), lo);
            assert_eq!(wide.upper.to_uint::<4>(), hi);
        }
    }

    #[test]
    fn u256_division_matches_reference() {
        let mut rng = DebugRng::new(1024);
        for _ in 0..200 {
            let (a, ra) = random_pair(&mut rng);
            let (b, rb) = random_pair(&mut rng);
            if b.is_zero() {
                continue;
            }
            let (q, r) = ra.div_rem(&rb.to_nz().unwrap());
            assert_eq!((a / b).to_uint::<4>(), q);
            assert_eq!((a % b).to_uint::<4>(), r);
            assert_eq!(a.div_rem(b), (U256::from_uint(&q), U256::from_uint(&r)));
        }
    }

    #[test]
    fn u256_shifts_match_reference() {
        let mut rng = DebugRng::new(2048);
        let (a, ra) = random_pair(&mut rng);
        for shift in 0..256 {
            assert_eq!((a << shift).to_uint::<4>(), ra.wrapping_shl_vartime(shift));
            assert_eq!((a >> shift).to_uint::<4>(), ra.wrapping_shr_vartime(shift));
        }
    }
}
