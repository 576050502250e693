// polar-sequence: print a polar-code reliability sequence.
//
// Usage: polar-sequence [ORDER] [NUMERATOR] [DENOMINATOR]
// Environment: POLSEQ_ORDER, POLSEQ_NUMERATOR, POLSEQ_DENOMINATOR,
// POLSEQ_WIDTH (64..4096 or f64), RUST_LOG

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polseq_cli::{compute, render_c_array, SequenceConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean C fragment
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polseq=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SequenceConfig::from_env().with_args(std::env::args().skip(1))?;
    tracing::info!("polar-sequence v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "order {} ({} positions), design {}/{}, type bits: {}",
        config.order,
        1u64 << config.order.min(63),
        config.numerator,
        config.denominator,
        config.precision
    );

    let sequence = compute(&config).context("computing reliability sequence")?;
    println!("{}", render_c_array(&sequence));
    Ok(())
}
