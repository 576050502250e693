// polar-sequence command support.
//
// - config: `SequenceConfig` from defaults, `POLSEQ_*` variables and
//   positional arguments
// - render: C array literal output
//
// `compute` dispatches the configured precision to the matching integer
// width.

pub mod config;
pub mod render;

pub use config::{Precision, SequenceConfig};
pub use render::render_c_array;

use polseq_numeric::{U1024, U128, U2048, U256, U4096, U512, U64};
use polseq_reliability::{ReliabilitySequence, Result};

/// Compute the sequence `config` describes.
pub fn compute(config: &SequenceConfig) -> Result<ReliabilitySequence> {
    let SequenceConfig { order, numerator, denominator, precision } = *config;
    match precision {
        Precision::Bits64 => ReliabilitySequence::try_compute::<U64>(order, numerator, denominator),
        Precision::Bits128 => ReliabilitySequence::try_compute::<U128>(order, numerator, denominator),
        Precision::Bits256 => ReliabilitySequence::try_compute::<U256>(order, numerator, denominator),
        Precision::Bits512 => ReliabilitySequence::try_compute::<U512>(order, numerator, denominator),
        Precision::Bits1024 => ReliabilitySequence::try_compute::<U1024>(order, numerator, denominator),
        Precision::Bits2048 => ReliabilitySequence::try_compute::<U2048>(order, numerator, denominator),
        Precision::Bits4096 => ReliabilitySequence::try_compute::<U4096>(order, numerator, denominator),
        Precision::Float => ReliabilitySequence::try_compute::<f64>(order, numerator, denominator),
    }
}
