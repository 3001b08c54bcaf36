// ============================================================================
// vidshrink-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and process exit codes
//
// Usage errors exit with clap's own status (2) before any of this runs.

use vidshrink_core::{BatchReport, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Every eligible file was converted or already present.
pub const EXIT_SUCCESS: i32 = 0;

/// The run aborted: missing converter, output directory, bad input or walk error.
pub const EXIT_FATAL: i32 = 1;

/// The batch finished but at least one file failed to convert.
pub const EXIT_PARTIAL_FAILURE: i32 = 3;

/// Maps a finished batch to the process exit status.
#[must_use]
pub fn exit_code_for(report: &BatchReport) -> i32 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_PARTIAL_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vidshrink_core::{ConversionRecord, ConversionStatus};

    fn report_with(status: ConversionStatus) -> BatchReport {
        BatchReport {
            records: vec![ConversionRecord {
                file_name: "a.mp4".to_string(),
                source: PathBuf::from("in/a.mp4"),
                destination: PathBuf::from("out/a.mp4"),
                input_size: 1,
                output_size: 0,
                status,
            }],
            ..BatchReport::default()
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&BatchReport::default()), EXIT_SUCCESS);
        assert_eq!(exit_code_for(&report_with(ConversionStatus::Converted)), EXIT_SUCCESS);
        assert_eq!(exit_code_for(&report_with(ConversionStatus::Skipped)), EXIT_SUCCESS);
        assert_eq!(
            exit_code_for(&report_with(ConversionStatus::Failed)),
            EXIT_PARTIAL_FAILURE
        );
    }
}
