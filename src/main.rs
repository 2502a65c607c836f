//! vargen CLI entry point

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vargen::config::{cli::Cli, cli_convert, toml as config_toml, RunConfig};
use vargen::generator::Generator;
use vargen::output::{json, text, text::TextSink};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Values own stdout, so logs go to stderr. RUST_LOG wins over --debug.
    let log_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    let generator = Generator::from_config(&config)?;

    if cli.dry_run {
        print_configuration(&config);
        eprintln!();
        eprintln!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let summary = match config.output.path {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut sink = TextSink::new(file);
            let summary = generator.run(&mut sink)?;
            // stdout is free when values go to a file
            text::print_summary(&summary);
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut sink = TextSink::new(stdout.lock());
            generator.run(&mut sink)?
        }
    };

    if let Some(ref path) = config.output.summary_json {
        json::write_summary(path, &summary, true)?;
        tracing::info!(path = %path.display(), "wrote run summary");
    }

    Ok(())
}

/// Build the run configuration from a TOML file and/or command-line flags
fn load_config(cli: &Cli) -> Result<RunConfig> {
    match cli.config {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "loading configuration file");
            let config = config_toml::parse_toml_file(path)?;
            config_toml::merge_cli_with_config(cli, config)
        }
        None => cli_convert::build_config_from_cli(cli),
    }
}

fn print_configuration(config: &RunConfig) {
    eprintln!("vargen v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("Configuration:");
    eprintln!("  Distribution: {}", config.distribution);
    eprintln!("  Seed: {}", config.seed);
    eprintln!("  Stop: {}", config.stop);
    match config.output.path {
        Some(ref path) => eprintln!("  Output: {}", path.display()),
        None => eprintln!("  Output: stdout"),
    }
    if let Some(ref path) = config.output.summary_json {
        eprintln!("  Summary: {}", path.display());
    }
}
