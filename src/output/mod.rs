//! Output sinks
//!
//! Generated values are handed to a [`Sink`] one at a time in generation
//! order. [`text::TextSink`] writes one value per line; [`VecSink`] keeps
//! them in memory. Run summaries are written separately by [`json`].

pub mod json;
pub mod text;

use crate::distribution::Variate;
use std::io;

/// Destination for generated values
pub trait Sink {
    /// Accept the next value
    fn write_value(&mut self, value: Variate) -> io::Result<()>;

    /// Flush anything buffered. Called once after the last value.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects values in memory
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    pub values: Vec<Variate>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Variate> {
        self.values
    }
}

impl Sink for VecSink {
    fn write_value(&mut self, value: Variate) -> io::Result<()> {
        self.values.push(value);
        Ok(())
    }
}
