//! Deterministic interarrival times
//!
//! Emits `1 / rate` every time. Draws nothing from the generator, so mixing
//! it into a run leaves the uniform stream untouched.

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::Lehmer;

/// Constant interarrival time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deterministic {
    interval: f64,
}

impl Deterministic {
    pub fn new(rate: f64) -> Result<Self> {
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(VariateError::param(format!("rate must be > 0, got {}", rate)));
        }
        Ok(Self { interval: 1.0 / rate })
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl Distribution for Deterministic {
    fn next_variate(&mut self, _rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.interval))
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }
}
