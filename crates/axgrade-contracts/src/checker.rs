//! The outcome of one checker invocation.
//!
//! A `CheckerResult` is produced once per run by a `Checker` and consumed by
//! the evaluator. It only describes a completed invocation; there is no
//! "still running" state.

use serde::{Deserialize, Serialize};

/// How the checker process finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CheckerExit {
    /// Every step exited with status zero.
    Success,
    /// A step exited non-zero, was killed, or could not be launched.
    Failure {
        /// The exit code, if the process produced one. `None` for launch
        /// failures and signal termination.
        code: Option<i32>,
        /// Human-readable description of what went wrong.
        cause: String,
    },
}

impl CheckerExit {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckerExit::Success)
    }
}

/// Exit status and captured text of a completed checker invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerResult {
    pub exit: CheckerExit,
    pub stdout: String,
    pub stderr: String,
}

impl CheckerResult {
    /// A run that exited successfully with the given output.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit: CheckerExit::Success,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// A run that exited with a failure status.
    pub fn failure(
        code: Option<i32>,
        cause: impl Into<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            exit: CheckerExit::Failure {
                code,
                cause: cause.into(),
            },
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// A run whose process never started. No output was captured.
    pub fn launch_failure(cause: impl Into<String>) -> Self {
        Self::failure(None, cause, String::new(), String::new())
    }
}
