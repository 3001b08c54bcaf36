// ============================================================================
// vidshrink-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// CoreConfig is created by the CLI from its flags and handed to `run_batch`.
// The codec parameters live in ConversionProfile, which renders the fixed
// ffmpeg argument vector for a source/destination pair.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Name of the conversion binary looked up on PATH.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Target frame width passed to the scale filter.
pub const DEFAULT_WIDTH: u32 = 640;

/// Target frame height passed to the scale filter.
pub const DEFAULT_HEIGHT: u32 = 480;

pub const DEFAULT_AUDIO_CODEC: &str = "aac";

pub const DEFAULT_AUDIO_BITRATE: &str = "128k";

/// Value of `-strict`; older ffmpeg builds need it for the native AAC encoder.
pub const DEFAULT_STRICT_MODE: &str = "experimental";

// ============================================================================
// CONVERSION PROFILE
// ============================================================================

/// Declarative description of the transcode applied to every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionProfile {
    pub width: u32,
    pub height: u32,
    pub audio_codec: String,
    pub audio_bitrate: String,
    pub strict_mode: Option<String>,
}

impl Default for ConversionProfile {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            strict_mode: Some(DEFAULT_STRICT_MODE.to_string()),
        }
    }
}

impl ConversionProfile {
    /// Builds the argument vector for converting `input` into `output`.
    ///
    /// With the default profile this is
    /// `-i <input> -vf scale=640:480 -c:a aac -strict experimental -b:a 128k <output>`.
    #[must_use]
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            input.as_os_str().to_os_string(),
            "-vf".into(),
            format!("scale={}:{}", self.width, self.height).into(),
            "-c:a".into(),
            self.audio_codec.clone().into(),
        ];

        if let Some(strict) = &self.strict_mode {
            args.push("-strict".into());
            args.push(strict.clone().into());
        }

        args.push("-b:a".into());
        args.push(self.audio_bitrate.clone().into());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for a conversion run.
///
/// # Examples
///
/// ```rust
/// use vidshrink_core::CoreConfig;
/// use std::path::PathBuf;
///
/// let config = CoreConfig::new(PathBuf::from("videos"), PathBuf::from("small"));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.profile.width, 640);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Input file or directory to convert
    pub input_path: PathBuf,

    /// Root of the mirrored output tree
    pub output_dir: PathBuf,

    /// Converter binary, either a bare name resolved on PATH or a path
    pub ffmpeg: PathBuf,

    pub profile: ConversionProfile,

    /// Optional wall-clock limit for a single conversion
    pub timeout: Option<Duration>,
}

impl CoreConfig {
    pub fn new(input_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_path,
            output_dir,
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG),
            profile: ConversionProfile::default(),
            timeout: None,
        }
    }

    /// Checks the configuration for values that can never produce a valid run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CoreError::Config("input path is empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("output directory is empty".to_string()));
        }
        if self.ffmpeg.as_os_str().is_empty() {
            return Err(CoreError::Config("converter binary is empty".to_string()));
        }
        if self.profile.width == 0 || self.profile.height == 0 {
            return Err(CoreError::Config(format!(
                "target resolution {}x{} is invalid",
                self.profile.width, self.profile.height
            )));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(CoreError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}
