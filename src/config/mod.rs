//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Everything here produces a [`RunConfig`], which is validated once before
//! the generator is seeded.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::unique::ShuffleMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete generation run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for the uniform source, in `[1, 2^31 - 2]`
    pub seed: i64,
    /// Distribution and its parameters
    pub distribution: DistributionParams,
    /// When to stop generating
    pub stop: StopCondition,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Distribution selection with its numeric parameters
///
/// Parameters are owned by the caller and never mutated by a sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionParams {
    Exponential {
        rate: f64,
    },
    Erlang {
        stages: u32,
        rate: f64,
    },
    /// Two-branch mixture with explicit rates
    #[serde(rename = "hyperexponential")]
    HyperExponential {
        rate1: f64,
        rate2: f64,
        p1: f64,
    },
    /// Two-branch mixture fitted to a CoV (Morse's method)
    #[serde(rename = "hyperexponential_cov")]
    HyperExponentialCov {
        rate: f64,
        cov: f64,
    },
    /// Interrupted Poisson process
    #[serde(rename = "ipp")]
    InterruptedPoisson {
        lambda: f64,
        alpha: f64,
        beta: f64,
    },
    Pareto {
        alpha: f64,
        k: f64,
    },
    Uniform {
        min: f64,
        max: f64,
    },
    UniformDiscrete {
        min: i64,
        max: i64,
    },
    Binomial {
        p: f64,
        n: u32,
    },
    Deterministic {
        rate: f64,
    },
    /// Discrete distribution read from a `probability value` file
    Empirical {
        path: PathBuf,
    },
    Zipf {
        alpha: f64,
        n: u64,
    },
    /// Shuffled distinct integers; the count comes from the stop condition
    Unique {
        #[serde(default)]
        shuffle: ShuffleMode,
    },
}

impl DistributionParams {
    /// Short name of the selected distribution
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exponential { .. } => "exponential",
            Self::Erlang { .. } => "erlang",
            Self::HyperExponential { .. } => "hyperexponential",
            Self::HyperExponentialCov { .. } => "hyperexponential_cov",
            Self::InterruptedPoisson { .. } => "ipp",
            Self::Pareto { .. } => "pareto",
            Self::Uniform { .. } => "uniform",
            Self::UniformDiscrete { .. } => "uniform_discrete",
            Self::Binomial { .. } => "binomial",
            Self::Deterministic { .. } => "deterministic",
            Self::Empirical { .. } => "empirical",
            Self::Zipf { .. } => "zipf",
            Self::Unique { .. } => "unique",
        }
    }

    /// Positive-valued interarrival distributions, the only ones that can
    /// stop on a cumulative time budget
    pub fn is_interarrival(&self) -> bool {
        matches!(
            self,
            Self::Exponential { .. }
                | Self::Erlang { .. }
                | Self::HyperExponential { .. }
                | Self::HyperExponentialCov { .. }
                | Self::InterruptedPoisson { .. }
                | Self::Pareto { .. }
                | Self::Deterministic { .. }
        )
    }
}

impl fmt::Display for DistributionParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Exponential { rate } => write!(f, "Exponential (rate={})", rate),
            Self::Erlang { stages, rate } => write!(f, "Erlang (stages={}, rate={})", stages, rate),
            Self::HyperExponential { rate1, rate2, p1 } => {
                write!(f, "Hyperexponential (rate1={}, rate2={}, p1={})", rate1, rate2, p1)
            }
            Self::HyperExponentialCov { rate, cov } => {
                write!(f, "Hyperexponential (rate={}, cov={})", rate, cov)
            }
            Self::InterruptedPoisson { lambda, alpha, beta } => {
                write!(f, "IPP (lambda={}, alpha={}, beta={})", lambda, alpha, beta)
            }
            Self::Pareto { alpha, k } => write!(f, "Pareto (alpha={}, k={})", alpha, k),
            Self::Uniform { min, max } => write!(f, "Uniform [{}, {}]", min, max),
            Self::UniformDiscrete { min, max } => write!(f, "Discrete uniform [{}, {}]", min, max),
            Self::Binomial { p, n } => write!(f, "Binomial (p={}, n={})", p, n),
            Self::Deterministic { rate } => write!(f, "Deterministic (rate={})", rate),
            Self::Empirical { path } => write!(f, "Empirical ({})", path.display()),
            Self::Zipf { alpha, n } => write!(f, "Zipf (alpha={}, N={})", alpha, n),
            Self::Unique { shuffle } => write!(f, "Unique integers ({:?} shuffle)", shuffle),
        }
    }
}

/// Stopping criterion for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCondition {
    /// Emit exactly this many values
    Count(u64),
    /// Emit until the running sum reaches this value (the crossing value is
    /// emitted)
    #[serde(rename = "time_period")]
    CumulativeThreshold(f64),
}

impl fmt::Display for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{} values", n),
            Self::CumulativeThreshold(t) => write!(f, "sum >= {}", t),
        }
    }
}

/// Where values and the run summary go
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file; stdout when absent
    pub path: Option<PathBuf>,
    /// Optional JSON run summary
    pub summary_json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interarrival_kinds() {
        assert!(DistributionParams::Exponential { rate: 1.0 }.is_interarrival());
        assert!(DistributionParams::Deterministic { rate: 1.0 }.is_interarrival());
        assert!(!DistributionParams::Zipf { alpha: 1.0, n: 10 }.is_interarrival());
        assert!(!DistributionParams::Uniform { min: 0.0, max: 1.0 }.is_interarrival());
    }

    #[test]
    fn test_display() {
        let params = DistributionParams::Zipf { alpha: 1.0, n: 1000 };
        assert_eq!(params.to_string(), "Zipf (alpha=1, N=1000)");
        assert_eq!(StopCondition::Count(5).to_string(), "5 values");
        assert_eq!(params.kind(), "zipf");
    }
}
