//! Core library for batch video downscaling with an external converter.
//!
//! This crate discovers video files in a directory tree, converts each one
//! with ffmpeg into a mirrored output tree and collects per-file size
//! records for the final summary.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidshrink_core::{CoreConfig, ProcessRunner, check_dependency, run_batch};
//! use std::path::PathBuf;
//!
//! let mut config = CoreConfig::new(
//!     PathBuf::from("/path/to/input"),
//!     PathBuf::from("/path/to/output"),
//! );
//! config.ffmpeg = check_dependency(&config.ffmpeg).unwrap();
//!
//! let report = run_batch(&config, ProcessRunner).unwrap();
//! print!("{}", report.to_text());
//! ```

pub mod config;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use config::{ConversionProfile, CoreConfig};
pub use converter::Converter;
pub use discovery::{InputFile, VIDEO_EXTENSIONS, discover_inputs, is_eligible};
pub use error::{CoreError, CoreResult};
pub use external::{CommandRunner, ProcessRunner, check_dependency};
pub use processing::{prepare_output_dir, run_batch, run_batch_since};
pub use reporting::{BatchReport, ConversionRecord, ConversionStatus};
pub use utils::format_size;
