//! Random variate transforms
//!
//! This module maps uniform draws from a [`Lehmer`] source to draws from a
//! target distribution. Continuous transforms use the inversion method;
//! mixtures first pick a branch, then invert; table-driven samplers
//! (empirical, Zipf) look the draw up in a precomputed CDF.
//!
//! # Distributions
//!
//! - **Exponential / Erlang**: inversion, Erlang as a sum of stages
//! - **Hyperexponential**: two-branch mixture by explicit rates, by CoV
//!   (Morse's method), or derived from an interrupted Poisson process
//! - **Pareto**: heavy-tailed inversion with lower bound `k`
//! - **Uniform**: continuous and discrete
//! - **Binomial**: count of successful Bernoulli trials
//! - **Deterministic**: constant interarrival time
//! - **Empirical**: user-supplied discrete distribution, linear scan
//! - **Zipf**: power law over `1..=N`, binary search
//! - **Unique**: shuffled set of distinct integers
//!
//! # Generator Ownership
//!
//! Transforms hold only their validated parameters (and, for table-driven
//! samplers, the table). The generator is passed in on every call so that a
//! run owns exactly one stream and parallel runs never share state.
//!
//! # Example
//!
//! ```
//! use vargen::distribution::{Distribution, exponential::Exponential};
//! use vargen::rng::Lehmer;
//!
//! let mut rng = Lehmer::new(1).unwrap();
//! let mut dist = Exponential::new(2.0).unwrap();
//! let v = dist.next_variate(&mut rng).unwrap();
//! assert!(v.as_f64() > 0.0);
//! ```

use crate::error::Result;
use crate::rng::Lehmer;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod binomial;
pub mod deterministic;
pub mod empirical;
pub mod exponential;
pub mod hyperexponential;
pub mod pareto;
pub mod uniform;
pub mod unique;
pub mod zipf;

/// A single sampled value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Variate {
    Real(f64),
    Integer(u64),
    /// Integer from a range that may include negatives
    Signed(i64),
}

impl Variate {
    /// Numeric value, used for cumulative stopping and summaries
    pub fn as_f64(&self) -> f64 {
        match *self {
            Variate::Real(v) => v,
            Variate::Integer(v) => v as f64,
            Variate::Signed(v) => v as f64,
        }
    }
}

/// Real values print with six decimals, integers as-is.
impl fmt::Display for Variate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variate::Real(v) => write!(f, "{:.6}", v),
            Variate::Integer(v) => write!(f, "{}", v),
            Variate::Signed(v) => write!(f, "{}", v),
        }
    }
}

/// Distribution trait for variate generation
///
/// Implementations are built from already-validated parameters, so the only
/// error a call can return is an internal invariant violation from a
/// table-driven sampler.
///
/// # Thread Safety
///
/// Distributions must be `Send` so a run can be moved to a worker thread.
/// They are not shared: each run owns its sampler and its generator.
pub trait Distribution: Send {
    /// Draw the next variate, advancing `rng`
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate>;

    /// Short name used in logs and summaries
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variate_display() {
        assert_eq!(Variate::Real(5.0).to_string(), "5.000000");
        assert_eq!(Variate::Real(0.1234567).to_string(), "0.123457");
        assert_eq!(Variate::Integer(161).to_string(), "161");
        assert_eq!(Variate::Signed(-7).to_string(), "-7");
    }

    #[test]
    fn test_variate_as_f64() {
        assert_eq!(Variate::Real(2.5).as_f64(), 2.5);
        assert_eq!(Variate::Integer(3).as_f64(), 3.0);
    }
}
