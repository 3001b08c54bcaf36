// ============================================================================
// vidshrink-core/src/processing.rs
// ============================================================================
//
// BATCH PROCESSING: Walk, Convert, Record
//
// `run_batch` is the orchestration routine. It prepares the output root,
// discovers the inputs, converts them one at a time in walk order and
// returns the records. Only startup and walk errors are fatal; a failed
// conversion becomes a `Failed` record and the loop moves on.

use crate::config::CoreConfig;
use crate::converter::Converter;
use crate::discovery::{InputFile, discover_inputs};
use crate::error::{CoreError, CoreResult};
use crate::external::CommandRunner;
use crate::reporting::{BatchReport, ConversionRecord, ConversionStatus};

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use log::{error, info};
use tempfile::NamedTempFile;

/// Creates the output root if needed and checks that it is writable by
/// creating and removing a scratch file in it.
///
/// # Errors
///
/// * `CoreError::OutputDir` - the directory cannot be created, is not a
///   directory, or cannot be written to
pub fn prepare_output_dir(dir: &Path) -> CoreResult<()> {
    let output_error = |source: io::Error| CoreError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.exists() {
        info!("Creating output folder {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(output_error)?;

    // Dropping the scratch file removes it.
    NamedTempFile::new_in(dir).map_err(output_error)?;
    Ok(())
}

/// Rejects an output root that is the input directory itself (or, for a
/// single-file input, the directory holding it). Every destination would
/// then be its own source and the whole batch would be skipped.
fn ensure_distinct_roots(input: &Path, output: &Path) -> CoreResult<()> {
    let (Ok(input), Ok(output)) = (input.canonicalize(), output.canonicalize()) else {
        return Ok(());
    };
    let input_root = if input.is_file() {
        input.parent().map(Path::to_path_buf).unwrap_or(input)
    } else {
        input
    };
    if input_root == output {
        return Err(CoreError::Config(format!(
            "output directory '{}' is the same as the input directory",
            output.display()
        )));
    }
    Ok(())
}

/// Converts every eligible file under `config.input_path`, timing the run
/// from this call. See [`run_batch_since`].
pub fn run_batch<R: CommandRunner>(config: &CoreConfig, runner: R) -> CoreResult<BatchReport> {
    run_batch_since(config, runner, Instant::now())
}

/// Converts every eligible file under `config.input_path`.
///
/// `started` is the instant the reported elapsed time is measured from,
/// normally taken when the process starts. The caller is responsible for
/// resolving `config.ffmpeg` beforehand
/// (see [`check_dependency`](crate::external::check_dependency)).
///
/// # Returns
///
/// * `Ok(BatchReport)` - one record per eligible file, in walk order,
///   whatever the outcome of each conversion
/// * `Err(CoreError)` - invalid configuration (including an output root
///   equal to the input directory), output root failure, or a walk error;
///   no further files are processed
pub fn run_batch_since<R: CommandRunner>(
    config: &CoreConfig,
    runner: R,
    started: Instant,
) -> CoreResult<BatchReport> {
    config.validate()?;

    prepare_output_dir(&config.output_dir)?;
    ensure_distinct_roots(&config.input_path, &config.output_dir)?;

    let inputs = discover_inputs(&config.input_path, Some(&config.output_dir))?;
    info!("Found {} video file(s) to process", inputs.len());

    let converter = Converter::new(config, runner);
    let mut records = Vec::with_capacity(inputs.len());
    for input in inputs {
        let record = convert_one(&converter, &config.output_dir, input);
        info!("----------------------------------------");
        records.push(record);
    }

    Ok(BatchReport {
        records,
        elapsed: started.elapsed(),
    })
}

fn convert_one<R: CommandRunner>(
    converter: &Converter<R>,
    output_root: &Path,
    input: InputFile,
) -> ConversionRecord {
    let destination = output_root.join(&input.relative);

    let parent_ready = match destination.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create directory {}: {}", parent.display(), e);
        }),
        None => Ok(()),
    };

    let status = match parent_ready {
        Ok(()) => converter.convert(&input.path, &destination),
        Err(()) => ConversionStatus::Failed,
    };

    let output_size = fs::metadata(&destination).map(|m| m.len()).unwrap_or(0);

    ConversionRecord {
        file_name: input.relative.display().to_string(),
        source: input.path,
        destination,
        input_size: input.size,
        output_size,
        status,
    }
}
