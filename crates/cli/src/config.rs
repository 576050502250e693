// Command configuration: defaults, then environment, then positional args.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Working precision of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Bits64,
    Bits128,
    Bits256,
    Bits512,
    Bits1024,
    Bits2048,
    Bits4096,
    /// f64 reference model.
    Float,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown precision {0:?} (expected 64, 128, 256, 512, 1024, 2048, 4096 or f64)")]
pub struct UnknownPrecision(pub String);

impl FromStr for Precision {
    type Err = UnknownPrecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "64" => Ok(Self::Bits64),
            "128" => Ok(Self::Bits128),
            "256" => Ok(Self::Bits256),
            "512" => Ok(Self::Bits512),
            "1024" => Ok(Self::Bits1024),
            "2048" => Ok(Self::Bits2048),
            "4096" => Ok(Self::Bits4096),
            "f64" | "float" => Ok(Self::Float),
            other => Err(UnknownPrecision(other.to_string())),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits64 => f.write_str("64"),
            Self::Bits128 => f.write_str("128"),
            Self::Bits256 => f.write_str("256"),
            Self::Bits512 => f.write_str("512"),
            Self::Bits1024 => f.write_str("1024"),
            Self::Bits2048 => f.write_str("2048"),
            Self::Bits4096 => f.write_str("4096"),
            Self::Float => f.write_str("f64"),
        }
    }
}

/// Sequence request configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Code order; block length is `2^order`
    pub order: u32,

    /// Design erasure probability numerator
    pub numerator: u64,

    /// Design erasure probability denominator
    pub denominator: u64,

    /// Working precision
    pub precision: Precision,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            order: 10,
            numerator: 3,
            denominator: 10,
            precision: Precision::Bits4096,
        }
    }
}

impl SequenceConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply `POLSEQ_*` values from `lookup` over the defaults. Values that
    /// fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(order) = lookup("POLSEQ_ORDER") {
            match order.trim().parse() {
                Ok(o) => config.order = o,
                Err(_) => tracing::warn!("Ignoring POLSEQ_ORDER={order:?}"),
            }
        }

        if let Some(numerator) = lookup("POLSEQ_NUMERATOR") {
            match numerator.trim().parse() {
                Ok(n) => config.numerator = n,
                Err(_) => tracing::warn!("Ignoring POLSEQ_NUMERATOR={numerator:?}"),
            }
        }

        if let Some(denominator) = lookup("POLSEQ_DENOMINATOR") {
            match denominator.trim().parse() {
                Ok(d) => config.denominator = d,
                Err(_) => tracing::warn!("Ignoring POLSEQ_DENOMINATOR={denominator:?}"),
            }
        }

        if let Some(width) = lookup("POLSEQ_WIDTH") {
            match width.parse() {
                Ok(p) => config.precision = p,
                Err(err) => tracing::warn!("Ignoring POLSEQ_WIDTH: {err}"),
            }
        }

        config
    }

    /// Override with positional `[ORDER] [NUMERATOR] [DENOMINATOR]`.
    pub fn with_args<I, S>(mut self, args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        if let Some(order) = args.next() {
            self.order = parse_arg("ORDER", order.as_ref())?;
        }
        if let Some(numerator) = args.next() {
            self.numerator = parse_arg("NUMERATOR", numerator.as_ref())?;
        }
        if let Some(denominator) = args.next() {
            self.denominator = parse_arg("DENOMINATOR", denominator.as_ref())?;
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument {:?}", extra.as_ref());
        }
        Ok(self)
    }
}

fn parse_arg<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    use anyhow::Context;

    value.trim().parse().with_context(|| format!("invalid {name} {value:?}"))
}
