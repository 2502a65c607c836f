//! Configuration validation
//!
//! Every parameter-domain check runs here, before the generator is seeded.
//! Checks reuse the sampler constructors so the rules live in one place.

use super::*;
use crate::distribution::binomial::Binomial;
use crate::distribution::deterministic::Deterministic;
use crate::distribution::exponential::{Erlang, Exponential};
use crate::distribution::hyperexponential::{
    HyperExponential, HyperExponentialCov, InterruptedPoisson,
};
use crate::distribution::pareto::Pareto;
use crate::distribution::uniform::{ContinuousUniform, DiscreteUniform};
use crate::distribution::unique::UniqueIntegers;
use crate::distribution::zipf::ZipfSampler;
use crate::error::{Result, VariateError};
use crate::rng::Lehmer;

/// Validate complete configuration
pub fn validate_config(config: &RunConfig) -> Result<()> {
    Lehmer::new(config.seed)?;
    validate_stop(&config.distribution, &config.stop)?;
    validate_distribution(&config.distribution, &config.stop)?;
    Ok(())
}

/// Validate the stop condition against the selected distribution
pub fn validate_stop(dist: &DistributionParams, stop: &StopCondition) -> Result<()> {
    match *stop {
        StopCondition::Count(0) => Err(VariateError::param("sample count must be >= 1")),
        StopCondition::Count(_) => Ok(()),
        StopCondition::CumulativeThreshold(t) => {
            if !(t > 0.0 && t.is_finite()) {
                return Err(VariateError::param(format!("time period must be > 0, got {}", t)));
            }
            if !dist.is_interarrival() {
                return Err(VariateError::param(format!(
                    "{} values cannot stop on a time period; use a sample count",
                    dist.kind()
                )));
            }
            Ok(())
        }
    }
}

/// Validate distribution parameters
pub fn validate_distribution(dist: &DistributionParams, stop: &StopCondition) -> Result<()> {
    match *dist {
        DistributionParams::Exponential { rate } => Exponential::new(rate).map(drop),
        DistributionParams::Erlang { stages, rate } => Erlang::new(stages, rate).map(drop),
        DistributionParams::HyperExponential { rate1, rate2, p1 } => {
            HyperExponential::new(rate1, rate2, p1).map(drop)
        }
        DistributionParams::HyperExponentialCov { rate, cov } => {
            HyperExponentialCov::new(rate, cov).map(drop)
        }
        DistributionParams::InterruptedPoisson { lambda, alpha, beta } => {
            InterruptedPoisson::new(lambda, alpha, beta).map(drop)
        }
        DistributionParams::Pareto { alpha, k } => Pareto::new(alpha, k).map(drop),
        DistributionParams::Uniform { min, max } => ContinuousUniform::new(min, max).map(drop),
        DistributionParams::UniformDiscrete { min, max } => {
            DiscreteUniform::new(min, max).map(drop)
        }
        DistributionParams::Binomial { p, n } => Binomial::new(p, n).map(drop),
        DistributionParams::Deterministic { rate } => Deterministic::new(rate).map(drop),
        DistributionParams::Empirical { ref path } => {
            // Table contents are checked when the file is loaded
            if path.as_os_str().is_empty() {
                return Err(VariateError::param("empirical distribution file path is empty"));
            }
            Ok(())
        }
        DistributionParams::Zipf { alpha, n } => ZipfSampler::new(alpha, n).map(drop),
        DistributionParams::Unique { shuffle } => match *stop {
            StopCondition::Count(num) => UniqueIntegers::new(num, shuffle).map(drop),
            StopCondition::CumulativeThreshold(_) => {
                Err(VariateError::param("unique integers require a sample count"))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(distribution: DistributionParams, stop: StopCondition) -> RunConfig {
        RunConfig {
            seed: 1,
            distribution,
            stop,
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let cfg = config(DistributionParams::Exponential { rate: 1.0 }, StopCondition::Count(10));
        assert!(validate_config(&cfg).is_ok());

        let cfg = config(
            DistributionParams::HyperExponentialCov { rate: 1.0, cov: 2.0 },
            StopCondition::CumulativeThreshold(100.0),
        );
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_invalid_seed() {
        let mut cfg = config(DistributionParams::Exponential { rate: 1.0 }, StopCondition::Count(10));
        cfg.seed = 0;
        assert_eq!(validate_config(&cfg), Err(VariateError::InvalidSeed(0)));
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            DistributionParams::Exponential { rate: -1.0 },
            DistributionParams::Erlang { stages: 0, rate: 1.0 },
            DistributionParams::HyperExponential { rate1: 1.0, rate2: 1.0, p1: 2.0 },
            DistributionParams::HyperExponentialCov { rate: 1.0, cov: 1.0 },
            DistributionParams::Pareto { alpha: 0.0, k: 1.0 },
            DistributionParams::Uniform { min: 3.0, max: 3.0 },
            DistributionParams::Zipf { alpha: 0.0, n: 10 },
            DistributionParams::Zipf { alpha: 1.0, n: 0 },
        ];
        for params in cases {
            let cfg = config(params.clone(), StopCondition::Count(1));
            assert!(
                matches!(validate_config(&cfg), Err(VariateError::InvalidParameter(_))),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn test_stop_condition_rules() {
        let zipf = DistributionParams::Zipf { alpha: 1.0, n: 10 };
        assert!(validate_config(&config(zipf.clone(), StopCondition::Count(0))).is_err());
        assert!(validate_config(&config(zipf, StopCondition::CumulativeThreshold(5.0))).is_err());

        let exp = DistributionParams::Exponential { rate: 1.0 };
        assert!(validate_config(&config(exp.clone(), StopCondition::CumulativeThreshold(0.0))).is_err());
        assert!(validate_config(&config(exp, StopCondition::CumulativeThreshold(f64::NAN))).is_err());
    }

    #[test]
    fn test_unique_requires_count() {
        let unique = DistributionParams::Unique { shuffle: ShuffleMode::Unbiased };
        assert!(validate_config(&config(unique.clone(), StopCondition::Count(100))).is_ok());
        assert!(validate_config(&config(unique, StopCondition::CumulativeThreshold(1.0))).is_err());
    }
}
