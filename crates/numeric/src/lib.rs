// Composable fixed-width unsigned integers.
//
// - word: the `Word` trait, implemented natively for u8/u16/u32/u64
// - uintx: `FixedWidth<H>`, a double-width integer built from two `H` halves,
//   itself a `Word`, so widths nest (U64 -> U128 -> ... -> U4096)
// - mul: widening and truncating products
// - division: bit-serial quotient/remainder and the combined `div`
// - bigint: conversions to and from crypto-bigint `Uint`
// - bitop: bit manipulation utilities on native integers
// - random: deterministic RNG for any `Word`

pub mod bigint;
pub mod bitop;
pub mod division;
pub mod mul;
pub mod random;
pub mod uintx;
pub mod word;


pub use bigint::UintInterop;
pub use division::div;
pub use mul::mul;
pub use uintx::{FixedWidth, U1024, U128, U16, U2048, U256, U32, U4096, U512, U64};
pub use word::Word;
