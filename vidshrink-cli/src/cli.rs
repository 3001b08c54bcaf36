// vidshrink-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

use vidshrink_core::config::DEFAULT_FFMPEG;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidshrink: batch video downscaling tool",
    long_about = "Walks an input tree and converts every video file to 640x480 with AAC audio \
                  using ffmpeg, mirroring the tree under the output directory."
)]
pub struct Cli {
    /// Input video file or directory to walk
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Directory where converted files are written (created if missing)
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Converter binary to run, either a name looked up on PATH or a path.
    /// Can also be set via the VIDSHRINK_FFMPEG environment variable.
    #[arg(long, value_name = "PATH", env = "VIDSHRINK_FFMPEG", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,

    /// Optional: Kill a single conversion after this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the summary as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
