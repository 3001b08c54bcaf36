// ============================================================================
// vidshrink-core/src/reporting.rs
// ============================================================================
//
// SUMMARY REPORTING: Per-file Records and the Final Report
//
// One ConversionRecord is produced for every eligible input, in walk order.
// The records are owned by the BatchReport returned from `run_batch`, which
// renders the plain-text summary or serializes to JSON.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::utils::format_size;

/// Outcome of a single conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    /// The converter ran and exited successfully
    Converted,
    /// A file already existed at the destination
    Skipped,
    /// The converter could not be started, exited non-zero or timed out
    Failed,
}

impl fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Converted => "converted",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Size record for one eligible input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    /// Name shown in the report (path relative to the input root)
    pub file_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub input_size: u64,
    /// Size of the destination after the attempt, zero when nothing is there
    pub output_size: u64,
    pub status: ConversionStatus,
}

impl ConversionRecord {
    /// Bytes saved by the conversion; negative when the output grew.
    ///
    /// Only converted records have a meaningful saving, skipped and failed
    /// ones return `None`.
    #[must_use]
    pub fn bytes_saved(&self) -> Option<i128> {
        match self.status {
            ConversionStatus::Converted => {
                Some(i128::from(self.input_size) - i128::from(self.output_size))
            }
            ConversionStatus::Skipped | ConversionStatus::Failed => None,
        }
    }
}

/// All records of one run, in walk order, plus the total wall-clock time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub records: Vec<ConversionRecord>,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl BatchReport {
    fn count(&self, status: ConversionStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    #[must_use]
    pub fn converted(&self) -> usize {
        self.count(ConversionStatus::Converted)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(ConversionStatus::Skipped)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(ConversionStatus::Failed)
    }

    /// True when no file failed. Skipped files count as success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Writes the human-readable summary.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Finished in {} seconds", self.elapsed.as_secs())?;
        for record in &self.records {
            writeln!(out, "File: {}", record.file_name)?;
            writeln!(out, "Status: {}", record.status)?;
            writeln!(out, "Input file size: {}", format_size(record.input_size))?;
            writeln!(out, "Output file size: {}", format_size(record.output_size))?;
            if let Some(saved) = record.bytes_saved() {
                let magnitude = u64::try_from(saved.unsigned_abs()).unwrap_or(u64::MAX);
                if saved >= 0 {
                    writeln!(out, "Saved: {}", format_size(magnitude))?;
                } else {
                    writeln!(out, "Grew: {}", format_size(magnitude))?;
                }
            }
            writeln!(out)?;
        }
        writeln!(
            out,
            "Converted: {}, Skipped: {}, Failed: {}",
            self.converted(),
            self.skipped(),
            self.failed()
        )
    }

    /// Renders the summary into a `String`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
