//! CLI to RunConfig conversion utilities

use crate::config::cli::{Bound, Cli, DistributionKind};
use crate::config::{DistributionParams, OutputConfig, RunConfig, StopCondition};
use crate::distribution::unique::ShuffleMode;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn require<T>(value: Option<T>, flag: &str, kind: DistributionKind) -> Result<T> {
    value.with_context(|| format!("--{} is required for {:?} distribution", flag, kind))
}

/// Convert the CLI distribution flags to DistributionParams
pub fn convert_distribution(cli: &Cli, kind: DistributionKind) -> Result<DistributionParams> {
    Ok(match kind {
        DistributionKind::Exponential => DistributionParams::Exponential {
            rate: require(cli.rate, "rate", kind)?,
        },
        DistributionKind::Erlang => DistributionParams::Erlang {
            stages: require(cli.stages, "stages", kind)?,
            rate: require(cli.rate, "rate", kind)?,
        },
        DistributionKind::Hyperexponential => DistributionParams::HyperExponential {
            rate1: require(cli.rate, "rate", kind)?,
            rate2: require(cli.rate2, "rate2", kind)?,
            p1: require(cli.p1, "p1", kind)?,
        },
        DistributionKind::HyperexponentialCov => DistributionParams::HyperExponentialCov {
            rate: require(cli.rate, "rate", kind)?,
            cov: require(cli.cov, "cov", kind)?,
        },
        DistributionKind::Ipp => DistributionParams::InterruptedPoisson {
            lambda: require(cli.rate, "rate", kind)?,
            alpha: require(cli.on_off_rate, "on-off-rate", kind)?,
            beta: require(cli.off_on_rate, "off-on-rate", kind)?,
        },
        DistributionKind::Pareto => DistributionParams::Pareto {
            alpha: require(cli.alpha, "alpha", kind)?,
            k: require(cli.k, "k", kind)?,
        },
        DistributionKind::Uniform => DistributionParams::Uniform {
            min: require(cli.min, "min", kind)?.as_f64(),
            max: require(cli.max, "max", kind)?.as_f64(),
        },
        DistributionKind::UniformDiscrete => DistributionParams::UniformDiscrete {
            min: integral(require(cli.min, "min", kind)?, "min")?,
            max: integral(require(cli.max, "max", kind)?, "max")?,
        },
        DistributionKind::Binomial => DistributionParams::Binomial {
            p: require(cli.p, "p", kind)?,
            n: u32::try_from(require(cli.n, "n", kind)?).context("--n is too large for binomial")?,
        },
        DistributionKind::Deterministic => DistributionParams::Deterministic {
            rate: require(cli.rate, "rate", kind)?,
        },
        DistributionKind::Empirical => DistributionParams::Empirical {
            path: require(cli.dist_file.clone(), "dist-file", kind)?,
        },
        DistributionKind::Zipf => DistributionParams::Zipf {
            alpha: require(cli.alpha, "alpha", kind)?,
            n: require(cli.n, "n", kind)?,
        },
        DistributionKind::Unique => DistributionParams::Unique {
            shuffle: convert_shuffle_mode(cli.legacy_shuffle),
        },
    })
}

/// Discrete bounds must be written as integers that fit in an i64
pub(crate) fn integral(value: Bound, flag: &str) -> Result<i64> {
    value.as_i64().with_context(|| {
        format!(
            "--{} must be an integer in [{}, {}] for discrete uniform, got {}",
            flag,
            i64::MIN,
            i64::MAX,
            value.as_f64()
        )
    })
}

/// Convert the legacy-shuffle flag to a ShuffleMode
pub fn convert_shuffle_mode(legacy: bool) -> ShuffleMode {
    if legacy {
        ShuffleMode::Legacy
    } else {
        ShuffleMode::Unbiased
    }
}

/// Convert --count / --time-period to a StopCondition
pub fn convert_stop_condition(count: Option<u64>, time_period: Option<f64>) -> Option<StopCondition> {
    match (count, time_period) {
        (Some(n), _) => Some(StopCondition::Count(n)),
        (None, Some(t)) => Some(StopCondition::CumulativeThreshold(t)),
        (None, None) => None,
    }
}

/// Map "-" to stdout
pub fn convert_output_path(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| p.as_os_str() != "-").map(Path::to_path_buf)
}

/// Build a RunConfig from command-line flags alone
pub fn build_config_from_cli(cli: &Cli) -> Result<RunConfig> {
    let seed = cli.seed.context("--seed is required")?;
    let kind = cli.distribution.context("--distribution is required")?;
    let distribution = convert_distribution(cli, kind)?;
    let stop = convert_stop_condition(cli.count, cli.time_period)
        .context("either --count or --time-period is required")?;

    Ok(RunConfig {
        seed,
        distribution,
        stop,
        output: OutputConfig {
            path: convert_output_path(cli.output.as_deref()),
            summary_json: cli.summary_json.clone(),
        },
    })
}
