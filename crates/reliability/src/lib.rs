// Polar-code reliability sequences.
//
// - design: validated rational design erasure probability
// - probability: `ErasureProbability`, implemented for `FixedWidth<H>` and f64
// - recursion: leaf probabilities over the polarization tree
// - ranking: leaves sorted by descending erasure probability
// - sequence: `ReliabilitySequence`, the public entry point
// - error: error type and `Result` alias

pub mod design;
pub mod error;
pub mod probability;
pub mod ranking;
pub mod recursion;
pub mod sequence;


pub use design::DesignPoint;
pub use error::{ReliabilityError, Result};
pub use probability::ErasureProbability;
pub use ranking::rank_descending;
pub use recursion::leaf_probabilities;
pub use sequence::{ReliabilitySequence, MAX_ORDER, MIN_ORDER};
