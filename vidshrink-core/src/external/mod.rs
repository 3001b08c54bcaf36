// ============================================================================
// vidshrink-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Converter Binary
//
// This module encapsulates everything that touches the external converter:
// resolving it on PATH at startup and running one invocation to completion.
// Running goes through the CommandRunner trait so the batch logic can be
// driven by a test double instead of a real ffmpeg.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Test doubles for [`CommandRunner`], built for unit tests and with the
/// `test-mocks` feature
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

/// Interval between `try_wait` polls while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Resolves the converter binary, returning its full path.
///
/// Bare names are looked up on PATH; anything containing a path separator
/// is checked in place.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the binary cannot be resolved
pub fn check_dependency(binary: &Path) -> CoreResult<PathBuf> {
    match which::which(binary) {
        Ok(path) => {
            debug!("Found dependency {} at {}", binary.display(), path.display());
            Ok(path)
        }
        Err(e) => {
            warn!("Dependency '{}' not found: {}", binary.display(), e);
            Err(CoreError::DependencyNotFound(binary.display().to_string()))
        }
    }
}

// ============================================================================
// COMMAND EXECUTION
// ============================================================================

/// Runs a fully built command to completion.
pub trait CommandRunner {
    /// Runs `cmd`, returning `Ok(())` only when it exits successfully.
    ///
    /// Implementations must not return while the child is still running.
    fn run(&self, cmd: &mut Command, timeout: Option<Duration>) -> CoreResult<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, cmd: &mut Command, timeout: Option<Duration>) -> CoreResult<()> {
        (**self).run(cmd, timeout)
    }
}

/// Production runner: spawns the child with inherited stdout/stderr so the
/// converter's own progress output reaches the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, cmd: &mut Command, timeout: Option<Duration>) -> CoreResult<()> {
        log_command(cmd);
        let program = cmd.get_program().to_string_lossy().into_owned();

        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CoreError::CommandStart(program.clone(), e))?;

        let status = match timeout {
            Some(limit) => wait_with_timeout(&mut child, limit, &program)?,
            None => child.wait()?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(CoreError::CommandFailed(program, status.code().unwrap_or(-1)))
        }
    }
}

/// Polls the child until it exits or `limit` elapses. On timeout the child
/// is killed and reaped before returning.
fn wait_with_timeout(child: &mut Child, limit: Duration, program: &str) -> CoreResult<ExitStatus> {
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if start.elapsed() >= limit => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CoreError::Timeout(program.to_string(), limit.as_secs()));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CoreError::Io(e));
            }
        }
    }
}

/// Logs a command line at debug level.
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();

    debug!("Executing command: {} {}", program, args.join(" "));
}
