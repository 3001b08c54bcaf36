//! File discovery module for finding video files to convert.
//!
//! The input may be a single file or a directory. Directories are walked
//! recursively in file-name order so that runs are reproducible, and only
//! regular files whose extension is in [`VIDEO_EXTENSIONS`] are returned.

use crate::error::{CoreError, CoreResult};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

/// Extensions (with the leading dot) accepted as conversion inputs.
/// Matching is case-sensitive.
pub const VIDEO_EXTENSIONS: [&str; 8] = [
    ".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".webm", ".m4v",
];

/// A discovered input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Full path of the source file
    pub path: PathBuf,
    /// Path relative to the input root, used to mirror the tree on output
    pub relative: PathBuf,
    /// Size in bytes at discovery time
    pub size: u64,
}

/// Returns true when the extension of `path` is in [`VIDEO_EXTENSIONS`].
///
/// ```rust
/// use std::path::Path;
/// use vidshrink_core::is_eligible;
///
/// assert!(is_eligible(Path::new("holiday/clip.mkv")));
/// assert!(!is_eligible(Path::new("clip.MKV")));
/// assert!(!is_eligible(Path::new("notes.txt")));
/// ```
#[must_use]
pub fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|allowed| allowed.strip_prefix('.') == Some(ext))
        })
}

/// Finds every eligible file under `input`.
///
/// When `input` is a file it must itself be eligible. When it is a
/// directory, the tree is walked following symlinks and the `exclude`
/// directory (typically the output root) is pruned below the root so
/// converted files are never fed back in as inputs. Dangling symlinks are
/// logged and skipped; symlink loops abort the walk.
///
/// # Errors
///
/// * `CoreError::InputNotFound` - `input` does not exist
/// * `CoreError::NotEligible` - `input` is a file with an unsupported extension
/// * `CoreError::Walk` - traversal failed part-way; the whole walk is aborted
pub fn discover_inputs(input: &Path, exclude: Option<&Path>) -> CoreResult<Vec<InputFile>> {
    let root = input.canonicalize().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CoreError::InputNotFound(input.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let metadata = fs::metadata(&root)?;

    if metadata.is_file() {
        if !is_eligible(&root) {
            return Err(CoreError::NotEligible(input.to_path_buf()));
        }
        let relative = root
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| CoreError::NotEligible(input.to_path_buf()))?;
        return Ok(vec![InputFile {
            path: root.clone(),
            relative,
            size: metadata.len(),
        }]);
    }

    let exclude = exclude.and_then(|dir| dir.canonicalize().ok());

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || exclude.as_deref().is_none_or(|skip| entry.path() != skip)
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => {
                warn!("Skipping broken symlink: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_eligible(entry.path()) {
            debug!("Ignoring non-video file {}", entry.path().display());
            continue;
        }

        let size = entry.metadata()?.len();
        let relative = entry
            .path()
            .strip_prefix(&root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(entry.file_name()));

        files.push(InputFile {
            path: entry.into_path(),
            relative,
            size,
        });
    }

    Ok(files)
}

/// A link below the root whose target is gone. Loops are not dangling.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_none()
        && err.depth() > 0
        && err.io_error().is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(|p| p.symlink_metadata().is_ok())
}
