//! Command implementations for the CLI.

/// Walks the input and converts every eligible file.
pub mod convert;
