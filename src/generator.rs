//! Generation driver
//!
//! Ties a validated [`RunConfig`] to a seeded [`Lehmer`] source and a boxed
//! sampler, and emits values until the stop condition is met. A run is
//! deterministic: the same configuration yields the same values.
//!
//! # Stop Conditions
//!
//! - `Count(n)`: exactly `n` values.
//! - `CumulativeThreshold(t)`: values are emitted until their running sum
//!   reaches `t`. The value that crosses the threshold is emitted too.

use crate::config::validator::validate_config;
use crate::config::{DistributionParams, RunConfig, StopCondition};
use crate::distribution::binomial::Binomial;
use crate::distribution::deterministic::Deterministic;
use crate::distribution::empirical::EmpiricalTable;
use crate::distribution::exponential::{Erlang, Exponential};
use crate::distribution::hyperexponential::{
    HyperExponential, HyperExponentialCov, InterruptedPoisson,
};
use crate::distribution::pareto::Pareto;
use crate::distribution::uniform::{ContinuousUniform, DiscreteUniform};
use crate::distribution::unique::UniqueIntegers;
use crate::distribution::zipf::ZipfSampler;
use crate::distribution::{Distribution, Variate};
use crate::error::VariateError;
use crate::output::Sink;
use crate::rng::Lehmer;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{debug, info};

/// Construct the sampler for a distribution
///
/// The empirical table is read from disk here. Unique integers take their
/// set size from a `Count` stop condition.
pub fn build_sampler(
    params: &DistributionParams,
    stop: &StopCondition,
) -> Result<Box<dyn Distribution>> {
    let sampler: Box<dyn Distribution> = match *params {
        DistributionParams::Exponential { rate } => Box::new(Exponential::new(rate)?),
        DistributionParams::Erlang { stages, rate } => Box::new(Erlang::new(stages, rate)?),
        DistributionParams::HyperExponential { rate1, rate2, p1 } => {
            Box::new(HyperExponential::new(rate1, rate2, p1)?)
        }
        DistributionParams::HyperExponentialCov { rate, cov } => {
            Box::new(HyperExponentialCov::new(rate, cov)?)
        }
        DistributionParams::InterruptedPoisson { lambda, alpha, beta } => {
            Box::new(InterruptedPoisson::new(lambda, alpha, beta)?)
        }
        DistributionParams::Pareto { alpha, k } => Box::new(Pareto::new(alpha, k)?),
        DistributionParams::Uniform { min, max } => Box::new(ContinuousUniform::new(min, max)?),
        DistributionParams::UniformDiscrete { min, max } => {
            Box::new(DiscreteUniform::new(min, max)?)
        }
        DistributionParams::Binomial { p, n } => Box::new(Binomial::new(p, n)?),
        DistributionParams::Deterministic { rate } => Box::new(Deterministic::new(rate)?),
        DistributionParams::Empirical { ref path } => {
            let contents = fs::read_to_string(path).with_context(|| {
                format!("Failed to read distribution file: {}", path.display())
            })?;
            let table: EmpiricalTable = contents.parse().with_context(|| {
                format!("Invalid distribution file: {}", path.display())
            })?;
            debug!(entries = table.len(), path = %path.display(), "loaded empirical table");
            Box::new(table)
        }
        DistributionParams::Zipf { alpha, n } => Box::new(ZipfSampler::new(alpha, n)?),
        DistributionParams::Unique { shuffle } => match *stop {
            StopCondition::Count(num) => Box::new(UniqueIntegers::new(num, shuffle)?),
            StopCondition::CumulativeThreshold(_) => {
                anyhow::bail!("unique integers require a sample count")
            }
        },
    };
    Ok(sampler)
}

/// Totals for a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub distribution: String,
    pub seed: i64,
    pub samples: u64,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// A seeded source paired with a sampler and a stop condition
pub struct Generator {
    rng: Lehmer,
    sampler: Box<dyn Distribution>,
    stop: StopCondition,
    seed: i64,
    description: String,
}

impl Generator {
    pub fn new(
        seed: i64,
        sampler: Box<dyn Distribution>,
        stop: StopCondition,
    ) -> crate::error::Result<Self> {
        let rng = Lehmer::new(seed)?;
        let description = sampler.name().to_string();
        Ok(Self {
            rng,
            sampler,
            stop,
            seed,
            description,
        })
    }

    /// Validate a configuration and build its generator
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        validate_config(config).context("Configuration validation failed")?;
        let sampler = build_sampler(&config.distribution, &config.stop)?;
        let mut generator = Self::new(config.seed, sampler, config.stop)?;
        generator.description = config.distribution.to_string();
        Ok(generator)
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn stop(&self) -> StopCondition {
        self.stop
    }

    /// Consume the generator as a lazy sequence of values
    pub fn into_samples(self) -> SampleSequence {
        SampleSequence {
            rng: self.rng,
            sampler: self.sampler,
            stop: self.stop,
            emitted: 0,
            sum: 0.0,
            done: false,
        }
    }

    /// Emit every value into `sink` and return the run totals
    pub fn run(self, sink: &mut dyn Sink) -> Result<RunSummary> {
        info!(
            distribution = %self.description,
            seed = self.seed,
            stop = %self.stop,
            "starting generation"
        );

        let mut summary = RunSummary {
            distribution: self.description.clone(),
            seed: self.seed,
            samples: 0,
            sum: 0.0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        };

        for value in self.into_samples() {
            let value = value?;
            sink.write_value(value).context("Failed to write value")?;

            let v = value.as_f64();
            summary.samples += 1;
            summary.sum += v;
            summary.min = summary.min.min(v);
            summary.max = summary.max.max(v);
        }
        sink.finish().context("Failed to flush output")?;

        if summary.samples > 0 {
            summary.mean = summary.sum / summary.samples as f64;
        } else {
            summary.min = 0.0;
            summary.max = 0.0;
        }

        debug!(samples = summary.samples, sum = summary.sum, "generation complete");
        Ok(summary)
    }
}

/// Values from a [`Generator`], in order
///
/// Ends when the stop condition is met or after yielding the first error.
pub struct SampleSequence {
    rng: Lehmer,
    sampler: Box<dyn Distribution>,
    stop: StopCondition,
    emitted: u64,
    sum: f64,
    done: bool,
}

impl SampleSequence {
    /// Number of values yielded so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Running sum of the values yielded so far
    pub fn running_sum(&self) -> f64 {
        self.sum
    }
}

impl Iterator for SampleSequence {
    type Item = std::result::Result<Variate, VariateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let StopCondition::Count(n) = self.stop {
            if self.emitted >= n {
                self.done = true;
                return None;
            }
        }

        let value = match self.sampler.next_variate(&mut self.rng) {
            Ok(v) => v,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        self.emitted += 1;
        self.sum += value.as_f64();
        if let StopCondition::CumulativeThreshold(t) = self.stop {
            if self.sum >= t {
                self.done = true;
            }
        }
        Some(Ok(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::distribution::unique::ShuffleMode;
    use crate::output::VecSink;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn config(seed: i64, distribution: DistributionParams, stop: StopCondition) -> RunConfig {
        RunConfig {
            seed,
            distribution,
            stop,
            output: OutputConfig::default(),
        }
    }

    fn collect(config: &RunConfig) -> Vec<Variate> {
        Generator::from_config(config)
            .unwrap()
            .into_samples()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_zipf_golden_through_driver() {
        let cfg = config(1, DistributionParams::Zipf { alpha: 1.0, n: 1000 }, StopCondition::Count(10));
        let values: Vec<u64> = collect(&cfg)
            .into_iter()
            .map(|v| match v {
                Variate::Integer(i) => i,
                other => panic!("zipf yields unsigned integers, got {:?}", other),
            })
            .collect();
        assert_eq!(values, vec![1, 1, 161, 17, 30, 3, 1, 90, 91, 614]);
    }

    #[test]
    fn test_count_stop() {
        let cfg = config(1, DistributionParams::Exponential { rate: 1.0 }, StopCondition::Count(5));
        let values = collect(&cfg);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0].to_string(), "11.758012");
        assert_eq!(values[4].to_string(), "0.629671");
    }

    #[test]
    fn test_threshold_stop_emits_crossing_value() {
        let cfg = config(
            1,
            DistributionParams::Exponential { rate: 2.0 },
            StopCondition::CumulativeThreshold(20.0),
        );
        let mut sink = VecSink::new();
        let summary = Generator::from_config(&cfg).unwrap().run(&mut sink).unwrap();

        assert_eq!(summary.samples, 23);
        assert_eq!(sink.values.len(), 23);
        assert_relative_eq!(summary.sum, 20.164364592253758, epsilon = 1e-9);
        assert_relative_eq!(sink.values[0].as_f64(), 5.8790059258080385, epsilon = 1e-12);

        let before_last: f64 = sink.values[..22].iter().map(Variate::as_f64).sum();
        assert!(before_last < 20.0);

        let cfg = config(
            1,
            DistributionParams::Exponential { rate: 2.0 },
            StopCondition::CumulativeThreshold(50.0),
        );
        assert_eq!(collect(&cfg).len(), 93);
    }

    #[test]
    fn test_threshold_first_value_crosses() {
        let cfg = config(
            1,
            DistributionParams::Exponential { rate: 1.0 },
            StopCondition::CumulativeThreshold(3.0),
        );
        assert_eq!(collect(&cfg).len(), 1);
    }

    #[test]
    fn test_deterministic_threshold() {
        let cfg = config(
            1,
            DistributionParams::Deterministic { rate: 4.0 },
            StopCondition::CumulativeThreshold(1.0),
        );
        let mut sink = VecSink::new();
        let summary = Generator::from_config(&cfg).unwrap().run(&mut sink).unwrap();
        assert_eq!(summary.samples, 4);
        assert_relative_eq!(summary.mean, 0.25);
        assert_relative_eq!(summary.min, 0.25);
        assert_relative_eq!(summary.max, 0.25);
        assert_eq!(summary.distribution, "Deterministic (rate=4)");
    }

    #[test]
    fn test_same_seed_same_values() {
        let cfg = config(
            4242,
            DistributionParams::HyperExponentialCov { rate: 1.0, cov: 2.0 },
            StopCondition::Count(500),
        );
        assert_eq!(collect(&cfg), collect(&cfg));

        let other = config(4243, cfg.distribution.clone(), cfg.stop);
        assert_ne!(collect(&cfg), collect(&other));
    }

    #[test]
    fn test_empirical_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0.25  5.00\n0.45  2.00\n0.15  1.00\n0.10  0.50\n0.05  0.25\n").unwrap();

        let cfg = config(
            1,
            DistributionParams::Empirical { path: file.path().to_path_buf() },
            StopCondition::Count(5),
        );
        let values: Vec<f64> = collect(&cfg).iter().map(Variate::as_f64).collect();
        assert_eq!(values, vec![5.0, 5.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_empirical_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0.5 1.0\n0.2 2.0\n").unwrap();
        let cfg = config(
            1,
            DistributionParams::Empirical { path: file.path().to_path_buf() },
            StopCondition::Count(5),
        );
        let err = Generator::from_config(&cfg).err().unwrap();
        assert!(matches!(
            err.root_cause().downcast_ref::<VariateError>(),
            Some(VariateError::MalformedDistribution(_))
        ));

        let missing = config(
            1,
            DistributionParams::Empirical { path: "/nonexistent/dist.txt".into() },
            StopCondition::Count(5),
        );
        assert!(Generator::from_config(&missing).is_err());
    }

    #[test]
    fn test_unique_through_driver() {
        let cfg = config(
            1,
            DistributionParams::Unique { shuffle: ShuffleMode::Legacy },
            StopCondition::Count(10),
        );
        let values = collect(&cfg);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], Variate::Integer(16777216));
        assert_eq!(values[9], Variate::Integer(536870912));
    }

    #[test]
    fn test_invalid_config_rejected_before_sampling() {
        let cfg = config(0, DistributionParams::Exponential { rate: 1.0 }, StopCondition::Count(5));
        let err = Generator::from_config(&cfg).err().unwrap();
        assert_eq!(
            err.root_cause().downcast_ref::<VariateError>(),
            Some(&VariateError::InvalidSeed(0))
        );

        let cfg = config(
            1,
            DistributionParams::Zipf { alpha: 1.0, n: 10 },
            StopCondition::CumulativeThreshold(10.0),
        );
        assert!(Generator::from_config(&cfg).is_err());
    }

    #[test]
    fn test_sequence_counters() {
        let sampler = Box::new(Deterministic::new(2.0).unwrap());
        let generator = Generator::new(1, sampler, StopCondition::Count(3)).unwrap();
        assert_eq!(generator.seed(), 1);
        let mut seq = generator.into_samples();
        while seq.next().is_some() {}
        assert_eq!(seq.emitted(), 3);
        assert_relative_eq!(seq.running_sum(), 1.5);
        assert!(seq.next().is_none());
    }

    #[test]
    fn test_sequence_running_sum_matches_iterator_sum() {
        let cfg = config(1, DistributionParams::Exponential { rate: 1.0 }, StopCondition::Count(5));
        let mut seq = Generator::from_config(&cfg).unwrap().into_samples();
        let first: f64 = seq.by_ref().take(2).map(|v| v.unwrap().as_f64()).sum();
        assert_relative_eq!(seq.running_sum(), first);
        let rest: f64 = seq.by_ref().map(|v| v.unwrap().as_f64()).sum();
        assert_eq!(seq.emitted(), 5);
        assert_relative_eq!(seq.running_sum(), first + rest, epsilon = 1e-12);
    }

    #[test]
    fn test_discrete_uniform_full_range_through_driver() {
        let cfg = config(
            1,
            DistributionParams::UniformDiscrete { min: i64::MIN, max: i64::MAX },
            StopCondition::Count(3),
        );
        let values = collect(&cfg);
        assert_eq!(values[0], Variate::Signed(i64::MIN + 16807));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_sequence_stops_after_error() {
        struct Failing;
        impl Distribution for Failing {
            fn next_variate(&mut self, _rng: &mut Lehmer) -> crate::error::Result<Variate> {
                Err(VariateError::InternalInvariantViolation("broken".into()))
            }
            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let generator = Generator::new(1, Box::new(Failing), StopCondition::Count(10)).unwrap();
        let mut seq = generator.into_samples();
        assert!(matches!(seq.next(), Some(Err(_))));
        assert!(seq.next().is_none());
    }
}
