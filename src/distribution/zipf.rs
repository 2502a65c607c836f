//! Zipf distribution implementation
//!
//! This module provides a Zipf (power law) distribution over `1..=N` where
//! `P(i) = C / i^alpha` and `C` normalizes the probabilities to sum to 1.
//!
//! # Characteristics
//!
//! - Small alpha (0.5): close to uniform
//! - alpha = 1.0: classic Zipf, frequency inversely proportional to rank
//! - Large alpha (2.0+): most draws land on the first few ranks
//!
//! # Use Cases
//!
//! - Object popularity (web caches, key-value workloads)
//! - Hot/cold data access patterns
//!
//! # Performance
//!
//! The cumulative table costs O(N) time and space and is built at most once
//! per `(alpha, N)` pair. Each sample is a binary search, O(log N).
//!
//! # Example
//!
//! ```
//! use vargen::distribution::zipf::ZipfSampler;
//! use vargen::rng::Lehmer;
//!
//! let mut rng = Lehmer::new(1).unwrap();
//! let mut zipf = ZipfSampler::new(1.0, 1000).unwrap();
//! zipf.build().unwrap();
//! let rank = zipf.sample(&mut rng).unwrap();
//! assert!((1..=1000).contains(&rank));
//! ```

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::{Lehmer, UniformSource};
use tracing::debug;

/// Normalized cumulative probabilities for one `(alpha, N)` pair
///
/// `sums[0] = 0` and `sums[i] = sums[i - 1] + C / i^alpha` for `i` in `1..=N`.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfTable {
    alpha: f64,
    n: u64,
    sums: Vec<f64>,
}

impl ZipfTable {
    /// Compute the cumulative table
    pub fn build(alpha: f64, n: u64) -> Result<Self> {
        validate(alpha, n)?;

        let len = n
            .checked_add(1)
            .and_then(|len| usize::try_from(len).ok())
            .ok_or(VariateError::AllocationFailure {
                what: "zipf table",
                requested: n.saturating_add(1),
            })?;

        let mut sums: Vec<f64> = Vec::new();
        sums.try_reserve_exact(len)
            .map_err(|_| VariateError::AllocationFailure {
                what: "zipf table",
                requested: len as u64,
            })?;

        // Normalization constant C = 1 / H(N, alpha)
        let mut c = 0.0;
        for i in 1..=n {
            c += 1.0 / (i as f64).powf(alpha);
        }
        let c = 1.0 / c;

        sums.push(0.0);
        let mut cumulative = 0.0;
        for i in 1..=n {
            cumulative += c / (i as f64).powf(alpha);
            sums.push(cumulative);
        }

        // Rounding can leave the tail a hair under 1.0, which would strand
        // the largest draws outside the table.
        if let Some(last) = sums.last_mut() {
            *last = last.max(1.0);
        }

        debug!(alpha, n, "built zipf table");
        Ok(Self { alpha, n, sums })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    /// Cumulative probability of ranks `1..=i`
    pub fn cumulative(&self, i: u64) -> Option<f64> {
        self.sums.get(usize::try_from(i).ok()?).copied()
    }

    /// Map a draw `z` in (0, 1) to the smallest rank `i` with
    /// `sums[i - 1] < z <= sums[i]`
    pub fn lookup(&self, z: f64) -> Result<u64> {
        let s = &self.sums;
        let mut low: u64 = 1;
        let mut high: u64 = self.n;

        while low <= high {
            let mid = low + (high - low) / 2;
            let m = mid as usize;
            if s[m] >= z && s[m - 1] < z {
                return Ok(mid);
            } else if s[m] >= z {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }

        debug_assert!(false, "zipf lookup of {} fell outside [1, {}]", z, self.n);
        Err(VariateError::InternalInvariantViolation(format!(
            "zipf lookup of {} fell outside [1, {}] (table tail {})",
            z,
            self.n,
            s[s.len() - 1]
        )))
    }
}

fn validate(alpha: f64, n: u64) -> Result<()> {
    if !(alpha > 0.0 && alpha.is_finite()) {
        return Err(VariateError::param(format!("Zipf alpha must be > 0, got {}", alpha)));
    }
    if n == 0 {
        return Err(VariateError::param("Zipf N must be >= 1"));
    }
    Ok(())
}

#[derive(Debug, Clone)]
enum TableState {
    Unbuilt,
    Built(ZipfTable),
}

/// Zipf sampler over `1..=N`
///
/// Starts UNBUILT. [`build`](Self::build) (or the first
/// [`sample`](Self::sample)) computes the table; changing `alpha` or `N`
/// through [`set_params`](Self::set_params) drops it again.
#[derive(Debug, Clone)]
pub struct ZipfSampler {
    alpha: f64,
    n: u64,
    state: TableState,
}

impl ZipfSampler {
    pub fn new(alpha: f64, n: u64) -> Result<Self> {
        validate(alpha, n)?;
        Ok(Self {
            alpha,
            n,
            state: TableState::Unbuilt,
        })
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, TableState::Built(_))
    }

    /// Change the parameters; the table is discarded only if they differ
    pub fn set_params(&mut self, alpha: f64, n: u64) -> Result<()> {
        validate(alpha, n)?;
        if alpha != self.alpha || n != self.n {
            self.alpha = alpha;
            self.n = n;
            self.state = TableState::Unbuilt;
        }
        Ok(())
    }

    /// Build the table for the current parameters if not already built
    pub fn build(&mut self) -> Result<&ZipfTable> {
        if let TableState::Unbuilt = self.state {
            self.state = TableState::Built(ZipfTable::build(self.alpha, self.n)?);
        }
        match &self.state {
            TableState::Built(table) => Ok(table),
            TableState::Unbuilt => unreachable!("zipf table was just built"),
        }
    }

    /// Draw a rank in `1..=N`
    pub fn sample(&mut self, rng: &mut impl UniformSource) -> Result<u64> {
        let table = self.build()?;
        let z = rng.next_open();
        table.lookup(z)
    }
}

impl Distribution for ZipfSampler {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        self.sample(rng).map(Variate::Integer)
    }

    fn name(&self) -> &'static str {
        "zipf"
    }
}
