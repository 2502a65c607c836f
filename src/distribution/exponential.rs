//! Exponential and Erlang distributions
//!
//! Exponential variates come from inverting the CDF:
//! `x = -(1 / rate) * ln(z)` with `z` strictly inside (0, 1), so `ln(0)` is
//! never evaluated. An Erlang variate is the sum of `stages` independent
//! exponential variates sharing one rate.

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::{Lehmer, UniformSource};

/// Exponential distribution with the given rate (mean `1 / rate`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self> {
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(VariateError::param(format!("rate must be > 0, got {}", rate)));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        let z = rng.next_open();
        -(1.0 / self.rate) * z.ln()
    }
}

impl Distribution for Exponential {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "exponential"
    }
}

/// Erlang distribution: `stages` exponential phases in series
///
/// Stage count is bounded only by `u32`; no per-stage storage is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Erlang {
    stages: u32,
    stage: Exponential,
}

impl Erlang {
    pub fn new(stages: u32, rate: f64) -> Result<Self> {
        if stages == 0 {
            return Err(VariateError::param("Erlang stages must be >= 1"));
        }
        Ok(Self {
            stages,
            stage: Exponential::new(rate)?,
        })
    }

    pub fn stages(&self) -> u32 {
        self.stages
    }

    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        (0..self.stages).map(|_| self.stage.sample(rng)).sum()
    }
}

impl Distribution for Erlang {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "erlang"
    }
}
