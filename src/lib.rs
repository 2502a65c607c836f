//! vargen - Reproducible random variate generation
//!
//! vargen produces streams of pseudorandom values from classical
//! probability distributions for simulation and queueing workloads. Every
//! value derives from a single seeded Lehmer (Park-Miller) generator, so a
//! run is fully determined by its seed and parameters.
//!
//! # Architecture
//!
//! - **Uniform source**: Lehmer generator with Schrage's overflow-free step
//! - **Continuous variates**: exponential, Erlang, hyperexponential, IPP, Pareto, uniform
//! - **Discrete variates**: Zipf, binomial, discrete uniform, empirical tables
//! - **Unique integers**: shuffled output of a maximal-period shift register
//! - **Driver**: count or cumulative-time stop conditions, text and JSON output

pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod output;
pub mod rng;

// Re-export commonly used types
pub use config::RunConfig;
pub use distribution::{Distribution, Variate};
pub use error::VariateError;
pub use generator::{Generator, RunSummary};
pub use rng::Lehmer;

/// Result type used throughout vargen
pub type Result<T> = anyhow::Result<T>;
