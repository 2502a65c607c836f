//! JSON output formatting

use crate::generator::RunSummary;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::path::Path;

/// Write a run summary as JSON
pub fn write_summary(output_path: &Path, summary: &RunSummary, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create summary file: {}", output_path.display()))?;

    if pretty {
        serde_json::to_writer_pretty(file, summary)?;
    } else {
        serde_json::to_writer(file, summary)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = RunSummary {
            distribution: "Zipf (alpha=1, N=1000)".to_string(),
            seed: 1,
            samples: 10,
            sum: 1009.0,
            mean: 100.9,
            min: 1.0,
            max: 614.0,
        };

        write_summary(&path, &summary, true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["samples"], 10);
        assert_eq!(value["seed"], 1);
        assert_eq!(value["max"], 614.0);
        assert_eq!(value["distribution"], "Zipf (alpha=1, N=1000)");
    }

    #[test]
    fn test_write_summary_bad_path() {
        let summary = RunSummary {
            distribution: String::new(),
            seed: 1,
            samples: 0,
            sum: 0.0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
        };
        assert!(write_summary(Path::new("/nonexistent/dir/s.json"), &summary, false).is_err());
    }
}
