//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Bound, Cli};
use crate::config::cli_convert::{
    convert_distribution, convert_output_path, convert_stop_condition, integral,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<RunConfig> {
    let config: RunConfig =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: RunConfig) -> Result<RunConfig> {
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    // A different distribution on the command line replaces the whole table;
    // otherwise individual parameters override the file's values
    match cli.distribution {
        Some(kind) => config.distribution = convert_distribution(cli, kind)?,
        None => apply_parameter_overrides(&mut config.distribution, cli)?,
    }

    if let Some(stop) = convert_stop_condition(cli.count, cli.time_period) {
        config.stop = stop;
    }

    if let Some(ref output) = cli.output {
        config.output.path = convert_output_path(Some(output.as_path()));
    }
    if let Some(ref summary) = cli.summary_json {
        config.output.summary_json = Some(summary.clone());
    }

    Ok(config)
}

fn apply_parameter_overrides(dist: &mut DistributionParams, cli: &Cli) -> Result<()> {
    match dist {
        DistributionParams::Exponential { rate } | DistributionParams::Deterministic { rate } => {
            override_with(rate, cli.rate);
        }
        DistributionParams::Erlang { stages, rate } => {
            override_with(stages, cli.stages);
            override_with(rate, cli.rate);
        }
        DistributionParams::HyperExponential { rate1, rate2, p1 } => {
            override_with(rate1, cli.rate);
            override_with(rate2, cli.rate2);
            override_with(p1, cli.p1);
        }
        DistributionParams::HyperExponentialCov { rate, cov } => {
            override_with(rate, cli.rate);
            override_with(cov, cli.cov);
        }
        DistributionParams::InterruptedPoisson { lambda, alpha, beta } => {
            override_with(lambda, cli.rate);
            override_with(alpha, cli.on_off_rate);
            override_with(beta, cli.off_on_rate);
        }
        DistributionParams::Pareto { alpha, k } => {
            override_with(alpha, cli.alpha);
            override_with(k, cli.k);
        }
        DistributionParams::Uniform { min, max } => {
            override_with(min, cli.min.map(Bound::as_f64));
            override_with(max, cli.max.map(Bound::as_f64));
        }
        DistributionParams::UniformDiscrete { min, max } => {
            if let Some(v) = cli.min {
                *min = integral(v, "min")?;
            }
            if let Some(v) = cli.max {
                *max = integral(v, "max")?;
            }
        }
        DistributionParams::Binomial { p, n } => {
            override_with(p, cli.p);
            if let Some(v) = cli.n {
                *n = u32::try_from(v).context("--n is too large for binomial")?;
            }
        }
        DistributionParams::Empirical { path } => {
            override_with(path, cli.dist_file.clone());
        }
        DistributionParams::Zipf { alpha, n } => {
            override_with(alpha, cli.alpha);
            override_with(n, cli.n);
        }
        DistributionParams::Unique { shuffle } => {
            if cli.legacy_shuffle {
                *shuffle = ShuffleMode::Legacy;
            }
        }
    }
    Ok(())
}

fn override_with<T>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["vargen"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_parse_toml_basic() {
        let toml = r#"
seed = 1

[distribution]
kind = "zipf"
alpha = 1.0
n = 1000

[stop]
count = 10
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.seed, 1);
        assert_eq!(config.distribution, DistributionParams::Zipf { alpha: 1.0, n: 1000 });
        assert_eq!(config.stop, StopCondition::Count(10));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_parse_toml_time_period_and_output() {
        let toml = r#"
seed = 12345

[distribution]
kind = "hyperexponential_cov"
rate = 1.0
cov = 2.0

[stop]
time_period = 500.0

[output]
path = "arrivals.txt"
summary_json = "summary.json"
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(
            config.distribution,
            DistributionParams::HyperExponentialCov { rate: 1.0, cov: 2.0 }
        );
        assert_eq!(config.stop, StopCondition::CumulativeThreshold(500.0));
        assert_eq!(config.output.path, Some(PathBuf::from("arrivals.txt")));
        assert_eq!(config.output.summary_json, Some(PathBuf::from("summary.json")));
    }

    #[test]
    fn test_parse_toml_unique_default_shuffle() {
        let toml = r#"
seed = 7
distribution = { kind = "unique" }
stop = { count = 100 }
"#;
        let config = parse_toml_string(toml).unwrap();
        assert_eq!(
            config.distribution,
            DistributionParams::Unique { shuffle: ShuffleMode::Unbiased }
        );
    }

    #[test]
    fn test_parse_toml_rejects_unknown_kind() {
        let toml = r#"
seed = 1
distribution = { kind = "gaussian", mean = 0.0 }
stop = { count = 1 }
"#;
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3").unwrap();
        writeln!(file, "distribution = {{ kind = \"exponential\", rate = 2.0 }}").unwrap();
        writeln!(file, "stop = {{ count = 5 }}").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.distribution, DistributionParams::Exponential { rate: 2.0 });
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = parse_toml_file(Path::new("/nonexistent/vargen.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_parameters() {
        let config = parse_toml_string(
            "seed = 1\ndistribution = { kind = \"pareto\", alpha = 1.5, k = 1.0 }\nstop = { count = 5 }\n",
        )
        .unwrap();

        let merged = merge_cli_with_config(&cli(&["--k", "2.5", "--seed", "9"]), config).unwrap();
        assert_eq!(merged.seed, 9);
        assert_eq!(merged.distribution, DistributionParams::Pareto { alpha: 1.5, k: 2.5 });
        assert_eq!(merged.stop, StopCondition::Count(5));
    }

    #[test]
    fn test_cli_replaces_distribution_and_stop() {
        let config = parse_toml_string(
            "seed = 1\ndistribution = { kind = \"zipf\", alpha = 1.0, n = 10 }\nstop = { count = 5 }\n",
        )
        .unwrap();

        let merged = merge_cli_with_config(
            &cli(&["-d", "exponential", "--rate", "2", "--time-period", "20", "-o", "-"]),
            config,
        )
        .unwrap();
        assert_eq!(merged.distribution, DistributionParams::Exponential { rate: 2.0 });
        assert_eq!(merged.stop, StopCondition::CumulativeThreshold(20.0));
        assert_eq!(merged.output.path, None);
    }
}
