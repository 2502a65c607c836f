//! Deterministic random sources
//!
//! - [`Lehmer`]: the uniform source every transform draws from
//! - [`Generator31`]: a maximal-period shift-register stream of distinct integers
//!
//! Continuous transforms are written against [`UniformSource`] rather than
//! [`Lehmer`] directly, so any draw sequence (including exact 0.0 and 1.0)
//! can be pushed through them.

pub mod generator31;
pub mod lehmer;

pub use generator31::Generator31;
pub use lehmer::Lehmer;

/// A stream of uniform draws on `[0, 1]`
pub trait UniformSource {
    /// Next raw draw. Exactly 0.0 or 1.0 are legal outputs.
    fn next_f64(&mut self) -> f64;

    /// Draw until the value lies strictly inside (0, 1)
    fn next_open(&mut self) -> f64 {
        loop {
            let z = self.next_f64();
            if z > 0.0 && z < 1.0 {
                return z;
            }
        }
    }
}

/// Replays a fixed list of draws
#[cfg(test)]
pub(crate) struct ScriptedDraws {
    draws: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedDraws {
    pub(crate) fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

#[cfg(test)]
impl UniformSource for ScriptedDraws {
    fn next_f64(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}
