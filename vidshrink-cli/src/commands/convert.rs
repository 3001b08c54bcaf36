//! Implementation of the conversion run.
//!
//! Checks the startup preconditions in order (configuration, converter on
//! PATH, output directory) and then hands over to `vidshrink_core::run_batch_since`.

use crate::cli::Cli;
use crate::error::CliResult;
use crate::logging::get_timestamp;

use std::time::{Duration, Instant};

use log::info;
use vidshrink_core::{BatchReport, CoreConfig, ProcessRunner, check_dependency, run_batch_since};

/// Builds the core configuration from the parsed flags.
pub fn create_core_config(args: &Cli) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::new(args.input_path.clone(), args.output_dir.clone());
    config.ffmpeg = args.ffmpeg.clone();
    config.timeout = args.timeout.map(Duration::from_secs);

    config.validate()?;
    Ok(config)
}

/// Runs one batch and returns its report. Errors are fatal to the run.
///
/// `started` is when the process started; the report's elapsed time covers
/// startup checks as well as the conversions.
pub fn run_convert(args: &Cli, started: Instant) -> CliResult<BatchReport> {
    info!("vidshrink run started: {}", get_timestamp());
    info!("Input value: {}", args.input_path.display());
    info!("Output value: {}", args.output_dir.display());

    let mut config = create_core_config(args)?;
    config.ffmpeg = check_dependency(&config.ffmpeg)?;
    info!("Using converter {}", config.ffmpeg.display());

    let report = run_batch_since(&config, ProcessRunner, started)?;

    info!(
        "vidshrink run finished: {} ({} converted, {} skipped, {} failed)",
        get_timestamp(),
        report.converted(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_create_core_config() {
        let cli = Cli::parse_from([
            "vidshrink", "-i", "in", "-o", "out", "--ffmpeg", "/usr/bin/ffmpeg", "--timeout", "30",
        ]);
        let config = create_core_config(&cli).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.ffmpeg, PathBuf::from("/usr/bin/ffmpeg"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.profile.width, 640);
        assert_eq!(config.profile.height, 480);
    }
}
