// vidshrink-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled for this crate's unit tests or when the
// "test-mocks" feature is enabled.

use super::CommandRunner;
use crate::error::{CoreError, CoreResult};

use std::cell::{Cell, RefCell};
use std::fs;
use std::process::Command;
use std::time::Duration;

/// A planned failure: any call whose arguments contain `arg_pattern` fails.
#[derive(Debug, Clone)]
struct FailureExpectation {
    arg_pattern: String,
    leave_partial_output: bool,
}

/// Mock runner that records every call and writes a fake output file.
///
/// Successful calls write `output_len` zero bytes to the last argument,
/// which is where the converter writes its destination.
#[derive(Debug, Default)]
pub struct MockRunner {
    received_calls: RefCell<Vec<Vec<String>>>,
    failures: RefCell<Vec<FailureExpectation>>,
    output_len: Cell<usize>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the file written on successful calls.
    pub fn with_output_len(self, len: usize) -> Self {
        self.output_len.set(len);
        self
    }

    /// Makes calls mentioning `arg_pattern` exit with status 1.
    pub fn add_failure(&self, arg_pattern: &str) {
        self.push_failure(arg_pattern, false);
    }

    /// Like [`add_failure`](Self::add_failure) but leaves a truncated
    /// output file behind, the way an interrupted ffmpeg does.
    pub fn add_failure_with_partial_output(&self, arg_pattern: &str) {
        self.push_failure(arg_pattern, true);
    }

    fn push_failure(&self, arg_pattern: &str, leave_partial_output: bool) {
        self.failures.borrow_mut().push(FailureExpectation {
            arg_pattern: arg_pattern.to_string(),
            leave_partial_output,
        });
    }

    pub fn received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received_calls.borrow().len()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, cmd: &mut Command, _timeout: Option<Duration>) -> CoreResult<()> {
        let program = cmd.get_program().to_string_lossy().into_owned();
        let args: Vec<String> = cmd
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let destination = args.last().cloned();
        let failure = self
            .failures
            .borrow()
            .iter()
            .find(|f| args.iter().any(|arg| arg.contains(&f.arg_pattern)))
            .cloned();

        match (failure, destination) {
            (Some(failure), destination) => {
                if let (true, Some(dest)) = (failure.leave_partial_output, destination) {
                    fs::write(dest, b"partial")?;
                }
                Err(CoreError::CommandFailed(program, 1))
            }
            (None, Some(dest)) => {
                fs::write(dest, vec![0u8; self.output_len.get()])?;
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }
}
