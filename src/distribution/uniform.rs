//! Uniform distributions
//!
//! - [`ContinuousUniform`]: `z * (max - min) + min`
//! - [`DiscreteUniform`]: `x mod (max - min + 1) + min`, where `x` is the raw
//!   integer state of the generator
//!
//! # Example
//!
//! ```
//! use vargen::distribution::uniform::ContinuousUniform;
//! use vargen::rng::Lehmer;
//!
//! let mut rng = Lehmer::new(1).unwrap();
//! let dist = ContinuousUniform::new(5.0, 10.0).unwrap();
//! for _ in 0..10 {
//!     let v = dist.sample(&mut rng);
//!     assert!(v >= 5.0 && v <= 10.0);
//! }
//! ```

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::{Lehmer, UniformSource};

/// Continuous uniform distribution on `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousUniform {
    min: f64,
    max: f64,
}

impl ContinuousUniform {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(VariateError::param(format!(
                "uniform bounds require min < max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        rng.next_f64() * (self.max - self.min) + self.min
    }
}

impl Distribution for ContinuousUniform {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Discrete uniform distribution on `min..=max`
///
/// The modulo reduction carries a small bias when the range does not divide
/// `2^31 - 2`; it is kept so sequences match other implementations of this
/// generator. Bounds may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    min: i64,
    /// `max - min + 1`, or `None` when the range covers all of `i64`
    span: Option<u64>,
}

impl DiscreteUniform {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(VariateError::param(format!(
                "discrete uniform bounds require min <= max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self {
            min,
            span: max.abs_diff(min).checked_add(1),
        })
    }

    /// Number of values in the range, `None` for the full `i64` range
    pub fn span(&self) -> Option<u64> {
        self.span
    }

    #[inline]
    pub fn sample(&self, rng: &mut Lehmer) -> i64 {
        let x = rng.next_int() as u64;
        // x < 2^31, so the offset never overflows past max
        let offset = match self.span {
            Some(span) => x % span,
            None => x,
        };
        self.min + offset as i64
    }
}

impl Distribution for DiscreteUniform {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Signed(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "uniform_discrete"
    }
}
