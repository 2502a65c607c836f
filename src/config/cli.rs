//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// A `--min`/`--max` value, kept exactly as typed
///
/// Integer text stays an `i64` so discrete bounds never pass through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Real(f64),
}

impl Bound {
    pub fn as_f64(self) -> f64 {
        match self {
            Bound::Int(v) => v as f64,
            Bound::Real(v) => v,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Bound::Int(v) => Some(v),
            Bound::Real(_) => None,
        }
    }
}

impl FromStr for Bound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Bound::Int(v));
        }
        s.parse::<f64>()
            .map(Bound::Real)
            .map_err(|_| format!("'{}' is not a number", s))
    }
}

/// Distribution kind selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    /// Exponential (--rate)
    Exponential,
    /// Erlang (--stages, --rate)
    Erlang,
    /// Hyperexponential by branch rates (--rate, --rate2, --p1)
    Hyperexponential,
    /// Hyperexponential by coefficient of variation (--rate, --cov)
    HyperexponentialCov,
    /// Interrupted Poisson process (--rate, --on-off-rate, --off-on-rate)
    Ipp,
    /// Pareto (--alpha, --k)
    Pareto,
    /// Continuous uniform (--min, --max)
    Uniform,
    /// Discrete uniform (--min, --max)
    UniformDiscrete,
    /// Binomial (--p, --n)
    Binomial,
    /// Constant interarrival time (--rate)
    Deterministic,
    /// Empirical distribution from a file (--dist-file)
    Empirical,
    /// Zipf over 1..=N (--alpha, --n)
    Zipf,
    /// Shuffled unique integers (--count)
    Unique,
}

/// vargen - reproducible random variate generator
#[derive(Parser, Debug)]
#[command(name = "vargen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (command-line flags override its values)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Random number seed (1 to 2147483646)
    #[arg(short = 's', long, env = "VARGEN_SEED")]
    pub seed: Option<i64>,

    /// Distribution to sample
    #[arg(short = 'd', long, value_enum)]
    pub distribution: Option<DistributionKind>,

    // === Distribution Parameters ===
    /// Rate (exponential, Erlang stage, hyperexponential branch 1, IPP on-rate, deterministic)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Second branch rate (hyperexponential)
    #[arg(long)]
    pub rate2: Option<f64>,

    /// Probability of the first branch (hyperexponential)
    #[arg(long)]
    pub p1: Option<f64>,

    /// Coefficient of variation, must be > 1 (hyperexponential-cov)
    #[arg(long)]
    pub cov: Option<f64>,

    /// Number of stages (Erlang)
    #[arg(long)]
    pub stages: Option<u32>,

    /// Shape parameter (Pareto, Zipf)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Lower bound (Pareto)
    #[arg(long)]
    pub k: Option<f64>,

    /// Lower bound (uniform; an i64 for uniform-discrete)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<Bound>,

    /// Upper bound (uniform; an i64 for uniform-discrete)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<Bound>,

    /// Largest value (Zipf) or number of trials (binomial)
    #[arg(long)]
    pub n: Option<u64>,

    /// Success probability (binomial)
    #[arg(long)]
    pub p: Option<f64>,

    /// On-to-off transition rate (IPP)
    #[arg(long)]
    pub on_off_rate: Option<f64>,

    /// Off-to-on transition rate (IPP)
    #[arg(long)]
    pub off_on_rate: Option<f64>,

    /// Distribution file of `probability value` pairs (empirical)
    #[arg(long)]
    pub dist_file: Option<PathBuf>,

    /// Use the legacy full-range shuffle (unique)
    #[arg(long)]
    pub legacy_shuffle: bool,

    // === Stop Condition ===
    /// Number of values to generate
    #[arg(long, conflicts_with = "time_period")]
    pub count: Option<u64>,

    /// Generate until the values sum to at least this much (interarrival kinds)
    #[arg(short = 't', long)]
    pub time_period: Option<f64>,

    // === Output Options ===
    /// Output file (stdout when omitted or "-")
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    // === Runtime Options ===
    /// Validate configuration and exit without generating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
