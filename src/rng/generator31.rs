//! 31-bit shift-register sequence
//!
//! `n' = (n >> 1) | (((n ^ (n >> 3)) & 1) << 30)`, started from 1. The
//! recurrence has maximal period, so the first `2^31 - 1` outputs are
//! pairwise distinct.

/// Period of the sequence
pub const PERIOD: u64 = (1 << 31) - 1;

/// Distinct-value stream used to build unique-integer sets
#[derive(Debug, Clone)]
pub struct Generator31 {
    n: u32,
}

impl Generator31 {
    pub fn new() -> Self {
        Self { n: 1 }
    }
}

impl Default for Generator31 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Generator31 {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let n = self.n;
        self.n = (n >> 1) | (((n ^ (n >> 3)) & 1) << 30);
        Some(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generator31_first_values() {
        let values: Vec<u32> = Generator31::new().take(4).collect();
        assert_eq!(values, vec![1 << 30, 1 << 29, 1 << 28, 1 << 27]);
    }

    #[test]
    fn test_generator31_distinct_prefix() {
        let values: HashSet<u32> = Generator31::new().take(200_000).collect();
        assert_eq!(values.len(), 200_000);
    }

    #[test]
    fn test_generator31_stays_in_31_bits() {
        for v in Generator31::new().take(100_000) {
            assert!(v > 0 && v < (1 << 31));
        }
    }
}
