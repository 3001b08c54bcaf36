// ============================================================================
// vidshrink-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for vidshrink-core
//
// Fatal errors (missing binary, output directory, walk failures, bad input)
// abort the run. Command errors are produced per file and never escape the
// batch loop; they are logged and recorded as failed conversions instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the vidshrink core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Required dependency '{0}' not found on PATH")]
    DependencyNotFound(String),

    #[error("Failed to create output directory '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Input path '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file '{}' is not a supported video file", .0.display())]
    NotEligible(PathBuf),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{0}' exited with status {1}")]
    CommandFailed(String, i32),

    #[error("Command '{0}' timed out after {1} seconds")]
    Timeout(String, u64),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for vidshrink-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
