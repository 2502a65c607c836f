//! Human-readable text output

use super::Sink;
use crate::distribution::Variate;
use crate::generator::RunSummary;
use std::io::{self, BufWriter, Write};

/// Writes one value per line
///
/// Real values use six decimal places, integers are written as-is.
pub struct TextSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn write_value(&mut self, value: Variate) -> io::Result<()> {
        writeln!(self.out, "{}", value)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Print a run summary to the console
pub fn print_summary(summary: &RunSummary) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                    RUN SUMMARY");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    print!("{}", format_summary(summary));
}

/// Render a run summary as aligned text
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Distribution: {}\nSeed:         {}\nSamples:      {}\nSum:          {:.6}\nMean:         {:.6}\nMin:          {:.6}\nMax:          {:.6}\n",
        summary.distribution,
        summary.seed,
        summary.samples,
        summary.sum,
        summary.mean,
        summary.min,
        summary.max,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sink_format() {
        let mut sink = TextSink::new(Vec::new());
        sink.write_value(Variate::Real(11.758012345)).unwrap();
        sink.write_value(Variate::Integer(161)).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text, "11.758012\n161\n");
    }

    #[test]
    fn test_format_summary() {
        let summary = RunSummary {
            distribution: "Deterministic (rate=4)".to_string(),
            seed: 1,
            samples: 4,
            sum: 1.0,
            mean: 0.25,
            min: 0.25,
            max: 0.25,
        };
        let text = format_summary(&summary);
        assert!(text.contains("Samples:      4"));
        assert!(text.contains("Mean:         0.250000"));
    }
}
