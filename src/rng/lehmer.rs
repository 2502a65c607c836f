//! Multiplicative congruential generator (Lehmer / Park-Miller)
//!
//! `x' = 16807 * x mod (2^31 - 1)`, evaluated with Schrage's decomposition so
//! every intermediate fits in a signed 32-bit integer. Seeded with 1, the
//! state after 10,000 draws is 1043618065 (Jain, "The Art of Computer Systems
//! Performance Analysis", fig. 26.2).
//!
//! This generator is weak and has a short period. It is kept because its
//! output is bit-reproducible across implementations, not for quality.
//!
//! # Example
//!
//! ```
//! use vargen::rng::Lehmer;
//!
//! let mut rng = Lehmer::new(1).unwrap();
//! let u = rng.next_f64();
//! assert!(u > 0.0 && u < 1.0);
//! ```

use super::UniformSource;
use crate::error::{Result, VariateError};
use rand::RngCore;

/// Modulus `2^31 - 1`
pub const MODULUS: i32 = 2_147_483_647;
/// Multiplier `7^5`
pub const MULTIPLIER: i32 = 16_807;
const Q: i32 = MODULUS / MULTIPLIER; // 127773
const R: i32 = MODULUS % MULTIPLIER; // 2836

/// Deterministic uniform source
///
/// One instance per generation run. It holds a single mutable register and is
/// not meant to be shared between concurrent callers; give each parallel
/// stream its own instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lehmer {
    state: i32,
}

impl Lehmer {
    /// Create a generator seeded with `seed`
    pub fn new(seed: i64) -> Result<Self> {
        let mut rng = Self { state: 1 };
        rng.seed(seed)?;
        Ok(rng)
    }

    /// Reset the state to `seed` without producing a value
    ///
    /// `2^31 - 1` is rejected: it is a fixed point of the recurrence and would
    /// yield 1.0 forever.
    pub fn seed(&mut self, seed: i64) -> Result<()> {
        if seed <= 0 || seed >= MODULUS as i64 {
            return Err(VariateError::InvalidSeed(seed));
        }
        self.state = seed as i32;
        Ok(())
    }

    /// Current register value
    pub fn state(&self) -> u32 {
        self.state as u32
    }

    #[inline]
    fn advance(&mut self) {
        let x = self.state;
        let next = MULTIPLIER * (x % Q) - R * (x / Q);
        self.state = if next > 0 { next } else { next + MODULUS };
    }

    /// Advance and return the new state, in `[1, 2^31 - 2]`
    #[inline]
    pub fn next_int(&mut self) -> u32 {
        self.advance();
        self.state as u32
    }

    /// Advance and return `state / (2^31 - 1)`
    ///
    /// Callers that cannot tolerate a boundary value must use
    /// [`next_open`](Self::next_open).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.advance();
        self.state as f64 / MODULUS as f64
    }

    /// Draw until the value lies strictly inside (0, 1)
    #[inline]
    pub fn next_open(&mut self) -> f64 {
        UniformSource::next_open(self)
    }
}

impl UniformSource for Lehmer {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        Lehmer::next_f64(self)
    }
}

/// Exposes the stream to `rand::Rng` helpers.
///
/// `next_u32` yields the 31-bit state, so the top bit is always clear.
impl RngCore for Lehmer {
    fn next_u32(&mut self) -> u32 {
        self.next_int()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_int() as u64;
        let lo = self.next_int() as u64;
        (hi << 31) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
