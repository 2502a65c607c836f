//! Two-branch hyperexponential distributions
//!
//! A hyperexponential variate is an exponential variate whose rate is picked
//! at random from two branches. Three parameterizations are provided:
//!
//! - [`HyperExponential`]: explicit branch rates and mixing probability
//! - [`HyperExponentialCov`]: target mean and coefficient of variation,
//!   fitted with Morse's method (MacDougall, "Simulating Computer Systems")
//! - [`InterruptedPoisson`]: an on/off Poisson source, converted once to the
//!   equivalent two-branch hyperexponential
//!
//! All three are used for bursty interarrival times, where CoV > 1.

use super::exponential::Exponential;
use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::{Lehmer, UniformSource};

/// Mixture of Exponential(rate1) with probability `p1` and
/// Exponential(rate2) otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperExponential {
    branch1: Exponential,
    branch2: Exponential,
    p1: f64,
}

impl HyperExponential {
    pub fn new(rate1: f64, rate2: f64, p1: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p1) {
            return Err(VariateError::param(format!(
                "branch probability p1 must be in [0, 1], got {}",
                p1
            )));
        }
        Ok(Self {
            branch1: Exponential::new(rate1)?,
            branch2: Exponential::new(rate2)?,
            p1,
        })
    }

    /// The selector draw is used as-is; only the exponential draw needs an
    /// open interval.
    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        if rng.next_f64() <= self.p1 {
            self.branch1.sample(rng)
        } else {
            self.branch2.sample(rng)
        }
    }
}

impl Distribution for HyperExponential {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "hyperexponential"
    }
}

/// Hyperexponential fitted to a mean rate and a coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperExponentialCov {
    mean: f64,
    p: f64,
}

impl HyperExponentialCov {
    /// `rate` is the overall arrival rate (mean `1 / rate`); `cov` must be > 1
    pub fn new(rate: f64, cov: f64) -> Result<Self> {
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(VariateError::param(format!("rate must be > 0, got {}", rate)));
        }
        if !(cov > 1.0 && cov.is_finite()) {
            return Err(VariateError::param(format!(
                "coefficient of variation must be > 1, got {}",
                cov
            )));
        }
        let c2 = cov * cov;
        let p = 0.5 * (1.0 - ((c2 - 1.0) / (c2 + 1.0)).sqrt());
        Ok(Self { mean: 1.0 / rate, p })
    }

    /// Mixing probability derived by Morse's method
    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        let z1 = rng.next_open();
        let z2 = rng.next_open();
        let scale = if z1 > self.p {
            self.mean / (1.0 - self.p)
        } else {
            self.mean / self.p
        };
        -0.5 * scale * z2.ln()
    }
}

impl Distribution for HyperExponentialCov {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "hyperexponential_cov"
    }
}

/// Interrupted Poisson process interarrival times
///
/// The source emits at rate `lambda` while on, turns off at rate `alpha` and
/// back on at rate `beta`. Its interarrival time is hyperexponential with
/// rates `lambda1`, `lambda2` and branch probability `pi1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterruptedPoisson {
    branch1: Exponential,
    branch2: Exponential,
    pi1: f64,
}

impl InterruptedPoisson {
    pub fn new(lambda: f64, alpha: f64, beta: f64) -> Result<Self> {
        for (name, v) in [("lambda", lambda), ("alpha", alpha), ("beta", beta)] {
            if !(v > 0.0 && v.is_finite()) {
                return Err(VariateError::param(format!("IPP {} must be > 0, got {}", name, v)));
            }
        }
        let t = lambda + alpha + beta;
        let root = (t * t - 4.0 * lambda * beta).sqrt();
        let lambda1 = 0.5 * (t + root);
        // lambda1 * lambda2 = lambda * beta; avoids cancellation in t - root
        let lambda2 = lambda * beta / lambda1;
        let pi1 = (lambda - lambda2) / (lambda1 - lambda2);
        Ok(Self {
            branch1: Exponential::new(lambda1)?,
            branch2: Exponential::new(lambda2)?,
            pi1,
        })
    }

    /// Equivalent hyperexponential parameters `(lambda1, lambda2, pi1)`
    pub fn hyperexponential_params(&self) -> (f64, f64, f64) {
        (self.branch1.rate(), self.branch2.rate(), self.pi1)
    }

    pub fn sample(&self, rng: &mut impl UniformSource) -> f64 {
        if rng.next_f64() < self.pi1 {
            self.branch1.sample(rng)
        } else {
            self.branch2.sample(rng)
        }
    }
}

impl Distribution for InterruptedPoisson {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "ipp"
    }
}
