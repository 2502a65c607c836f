//! Empirical (table-driven) distribution
//!
//! Built from an ordered list of `(probability, value)` pairs. The cumulative
//! probabilities are accumulated in input order, not sorted by value, and the
//! last one must reach 1.0.
//!
//! # Input Format
//!
//! Whitespace-separated floating-point tokens read in pairs,
//! `probability value`, normally one pair per line:
//!
//! ```text
//! 0.25  5.00
//! 0.45  2.00
//! 0.15  1.00
//! 0.10  0.50
//! 0.05  0.25
//! ```
//!
//! # Performance
//!
//! Sampling is a linear scan, O(table size). Tables are small compared with
//! the number of samples drawn from them.

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::Lehmer;
use std::str::FromStr;

/// Allowed distance between the final cumulative probability and 1.0
pub const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CdfEntry {
    cumulative: f64,
    value: f64,
}

/// Cumulative distribution table built from a discrete distribution
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalTable {
    entries: Vec<CdfEntry>,
}

impl EmpiricalTable {
    /// Build the table from `(probability, value)` pairs
    pub fn new(pairs: &[(f64, f64)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(VariateError::MalformedDistribution("distribution has no entries".into()));
        }

        let mut entries = Vec::with_capacity(pairs.len());
        let mut cumulative = 0.0;
        for (i, &(probability, value)) in pairs.iter().enumerate() {
            if !(0.0..=1.0).contains(&probability) {
                return Err(VariateError::MalformedDistribution(format!(
                    "entry {} has probability {} outside [0, 1]",
                    i + 1,
                    probability
                )));
            }
            if !value.is_finite() {
                return Err(VariateError::MalformedDistribution(format!(
                    "entry {} has non-finite value {}",
                    i + 1,
                    value
                )));
            }
            cumulative += probability;
            entries.push(CdfEntry { cumulative, value });
        }

        if (cumulative - 1.0).abs() > SUM_TOLERANCE {
            return Err(VariateError::MalformedDistribution(format!(
                "sum of probabilities is {:.6} (must be 1.0)",
                cumulative
            )));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(cumulative probability, value)` pairs in input order
    pub fn cdf(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().map(|e| (e.cumulative, e.value))
    }

    /// True when every value is strictly positive
    pub fn all_positive(&self) -> bool {
        self.entries.iter().all(|e| e.value > 0.0)
    }

    pub fn sample(&self, rng: &mut Lehmer) -> f64 {
        let z = rng.next_f64();
        // A last cumulative value a hair under 1.0 (within tolerance) can
        // miss the top draws; those belong to the final entry.
        self.entries
            .iter()
            .find(|e| z <= e.cumulative)
            .or_else(|| self.entries.last())
            .map(|e| e.value)
            .unwrap_or_default()
    }
}

impl FromStr for EmpiricalTable {
    type Err = VariateError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| {
                    VariateError::MalformedDistribution(format!("cannot parse '{}' as a number", tok))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if tokens.len() % 2 != 0 {
            return Err(VariateError::MalformedDistribution(format!(
                "expected probability/value pairs, got {} tokens",
                tokens.len()
            )));
        }

        let pairs: Vec<(f64, f64)> = tokens.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        Self::new(&pairs)
    }
}

impl Distribution for EmpiricalTable {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        Ok(Variate::Real(self.sample(rng)))
    }

    fn name(&self) -> &'static str {
        "empirical"
    }
}
