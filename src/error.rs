//! Error types for variate generation
//!
//! Every parameter-domain problem is detected before the first draw and
//! reported through [`VariateError`]. Outer layers (config loading, file IO,
//! the binary) wrap these in `anyhow` with context.

use thiserror::Error;

/// Errors raised by the generator core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariateError {
    /// Seed outside `[1, 2^31 - 2]`
    #[error("invalid seed {0}: must be in range [1, 2147483646]")]
    InvalidSeed(i64),

    /// Out-of-domain distribution parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empirical distribution that cannot be turned into a CDF
    #[error("malformed distribution: {0}")]
    MalformedDistribution(String),

    /// A table or array could not be allocated
    #[error("cannot allocate {what} of {requested} entries")]
    AllocationFailure { what: &'static str, requested: u64 },

    /// Sampling produced something the tables say is impossible
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl VariateError {
    pub(crate) fn param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type for the generator core
pub type Result<T> = std::result::Result<T, VariateError>;
