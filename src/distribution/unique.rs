//! Unique random integers
//!
//! Fills an array with consecutive outputs of [`Generator31`], which are
//! pairwise distinct within its period, then shuffles the array with the
//! integer output of the uniform source. The result is a permutation of the
//! generated set, never a resampling.
//!
//! # Shuffle Modes
//!
//! - [`ShuffleMode::Unbiased`] (default): Fisher-Yates, swapping position `i`
//!   with a position drawn from `i..num`.
//! - [`ShuffleMode::Legacy`]: swaps position `i` with a position drawn from
//!   the full range `0..num` on every step, after discarding one draw. This
//!   reproduces the output of the classic `genuniq` tool bit for bit but
//!   does not give every permutation equal probability.

use super::{Distribution, Variate};
use crate::error::{Result, VariateError};
use crate::rng::generator31::{Generator31, PERIOD};
use crate::rng::Lehmer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the generated set is permuted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    #[default]
    Unbiased,
    Legacy,
}

/// First `num` outputs of [`Generator31`], unshuffled
pub fn distinct_integers(num: u64) -> Result<Vec<u32>> {
    if num == 0 {
        return Err(VariateError::param("number of unique values must be >= 1"));
    }
    if num > PERIOD {
        return Err(VariateError::param(format!(
            "cannot generate {} unique values: sequence period is {}",
            num, PERIOD
        )));
    }

    let len = usize::try_from(num).map_err(|_| VariateError::AllocationFailure {
        what: "unique integer array",
        requested: num,
    })?;
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| VariateError::AllocationFailure {
            what: "unique integer array",
            requested: num,
        })?;
    values.extend(Generator31::new().take(len));
    Ok(values)
}

/// Permute `values` in place
pub fn shuffle(values: &mut [u32], rng: &mut Lehmer, mode: ShuffleMode) {
    let num = values.len() as u64;
    if num == 0 {
        return;
    }
    match mode {
        ShuffleMode::Unbiased => {
            for i in 0..values.len() {
                let remaining = num - i as u64;
                let j = i + (rng.next_int() as u64 % remaining) as usize;
                values.swap(i, j);
            }
        }
        ShuffleMode::Legacy => {
            rng.next_int();
            for i in 0..values.len() {
                let j = (rng.next_int() as u64 % num) as usize;
                values.swap(i, j);
            }
        }
    }
}

/// Generate `num` distinct integers in shuffled order
pub fn unique_integers(num: u64, rng: &mut Lehmer, mode: ShuffleMode) -> Result<Vec<u32>> {
    let mut values = distinct_integers(num)?;
    shuffle(&mut values, rng, mode);
    debug!(num, ?mode, "generated unique integer set");
    Ok(values)
}

/// Emits a shuffled unique-integer set one value at a time
///
/// The set is generated on the first draw, consuming the generator at that
/// point, and yields exactly `num` values.
#[derive(Debug, Clone)]
pub struct UniqueIntegers {
    num: u64,
    mode: ShuffleMode,
    values: Option<Vec<u32>>,
    next: usize,
}

impl UniqueIntegers {
    pub fn new(num: u64, mode: ShuffleMode) -> Result<Self> {
        if num == 0 || num > PERIOD {
            return Err(VariateError::param(format!(
                "number of unique values must be in [1, {}], got {}",
                PERIOD, num
            )));
        }
        Ok(Self {
            num,
            mode,
            values: None,
            next: 0,
        })
    }

    pub fn len(&self) -> u64 {
        self.num
    }

    pub fn is_empty(&self) -> bool {
        self.num == 0
    }
}

impl Distribution for UniqueIntegers {
    fn next_variate(&mut self, rng: &mut Lehmer) -> Result<Variate> {
        if self.values.is_none() {
            self.values = Some(unique_integers(self.num, rng, self.mode)?);
        }
        let values = self.values.as_deref().unwrap_or_default();
        let value = values.get(self.next).copied().ok_or_else(|| {
            VariateError::param(format!("only {} unique values were requested", self.num))
        })?;
        self.next += 1;
        Ok(Variate::Integer(value as u64))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}
