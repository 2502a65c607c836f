//! Binomial distribution by direct simulation
//!
//! Runs `n` Bernoulli trials per variate, each a uniform draw compared
//! against `p`. Cost is O(n) per sample.

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::Lehmer;

/// Number of successes in `n` trials with success probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    p: f64,
    n: u32,
}

impl Binomial {
    pub fn new(p: f64, n: u32) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(VariateError::param(format!("binomial p must be in [0, 1], got {}", p)));
        }
        if n == 0 {
            return Err(VariateError::param("binomial n must be >= 1"));
        }
        Ok(Self { p, n })
    }

    pub fn sample(&self, rng: &mut Lehmer) -> u64 {
        (0..self.n).filter(|_| rng.next_f64() < self.p).count() as u64
    }
}

impl Distribution for Binomial {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Integer(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "binomial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_golden() {
        let mut rng = Lehmer::new(1).unwrap();
        let dist = Binomial::new(0.5, 10).unwrap();
        let values: Vec<u64> = (0..5).map(|_| dist.sample(&mut rng)).collect();
        assert_eq!(values, vec![5, 6, 3, 4, 4]);
    }

    #[test]
    fn test_binomial_bounds_and_mean() {
        let mut rng = Lehmer::new(8).unwrap();
        let dist = Binomial::new(0.3, 20).unwrap();
        let n = 50_000;
        let mut total = 0u64;
        for _ in 0..n {
            let v = dist.sample(&mut rng);
            assert!(v <= 20);
            total += v;
        }
        assert_relative_eq!(total as f64 / n as f64, 6.0, max_relative = 0.02);
    }

    #[test]
    fn test_binomial_extremes() {
        let mut rng = Lehmer::new(8).unwrap();
        let never = Binomial::new(0.0, 5).unwrap();
        let always = Binomial::new(1.0, 5).unwrap();
        for _ in 0..100 {
            assert_eq!(never.sample(&mut rng), 0);
            assert_eq!(always.sample(&mut rng), 5);
        }
    }

    #[test]
    fn test_binomial_invalid() {
        assert!(Binomial::new(1.1, 5).is_err());
        assert!(Binomial::new(0.5, 0).is_err());
    }
}
