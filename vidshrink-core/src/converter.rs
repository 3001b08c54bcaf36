//! Converter invoker: runs the external binary for one source/destination pair.

use crate::config::{ConversionProfile, CoreConfig};
use crate::external::CommandRunner;
use crate::reporting::ConversionStatus;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use log::{error, info, warn};

/// Converts single files with a fixed [`ConversionProfile`].
#[derive(Debug)]
pub struct Converter<R> {
    program: PathBuf,
    profile: ConversionProfile,
    timeout: Option<Duration>,
    runner: R,
}

impl<R: CommandRunner> Converter<R> {
    pub fn new(config: &CoreConfig, runner: R) -> Self {
        Self {
            program: config.ffmpeg.clone(),
            profile: config.profile.clone(),
            timeout: config.timeout,
            runner,
        }
    }

    /// Builds the converter command for `input` -> `output`.
    #[must_use]
    pub fn build_command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.profile.args(input, output));
        cmd
    }

    /// Converts `input` into `output`.
    ///
    /// An existing `output` is left untouched and reported as skipped, which
    /// makes repeated runs over the same output tree resume where the last
    /// one stopped. Failures are logged and never propagated; whatever the
    /// converter left at `output` is removed so the next run retries it.
    ///
    /// The parent directory of `output` must already exist.
    pub fn convert(&self, input: &Path, output: &Path) -> ConversionStatus {
        info!("Converting file {}", input.display());
        info!("Output file {}", output.display());

        if output.exists() {
            info!("File already exists, skipping");
            return ConversionStatus::Skipped;
        }

        let mut cmd = self.build_command(input, output);
        match self.runner.run(&mut cmd, self.timeout) {
            Ok(()) => ConversionStatus::Converted,
            Err(e) => {
                error!("Failed to convert {}: {}", input.display(), e);
                discard_partial_output(output);
                ConversionStatus::Failed
            }
        }
    }
}

fn discard_partial_output(output: &Path) {
    if !output.exists() {
        return;
    }
    match fs::remove_file(output) {
        Ok(()) => warn!("Removed incomplete output {}", output.display()),
        Err(e) => warn!(
            "Could not remove incomplete output {}: {}",
            output.display(),
            e
        ),
    }
}
