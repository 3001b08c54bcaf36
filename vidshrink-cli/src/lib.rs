// vidshrink-cli/src/lib.rs
//
// Library portion of the vidshrink CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::convert::run_convert;
pub use error::{CliResult, EXIT_FATAL, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS, exit_code_for};
