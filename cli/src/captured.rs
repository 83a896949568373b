//! A `Checker` that replays output captured from an earlier checker run.

use axgrade_contracts::{checker::CheckerResult, error::GradeResult};
use axgrade_core::traits::Checker;

pub struct CapturedChecker {
    result: CheckerResult,
}

impl CapturedChecker {
    /// Build from captured text. `exit_code` 0 is success; anything else is
    /// reported as a failed checker.
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        let result = if exit_code == 0 {
            CheckerResult::success(stdout, stderr)
        } else {
            CheckerResult::failure(
                Some(exit_code),
                format!("checker exited with code {exit_code}"),
                stdout,
                stderr,
            )
        };
        Self { result }
    }
}

impl Checker for CapturedChecker {
    fn check(&self) -> GradeResult<CheckerResult> {
        Ok(self.result.clone())
    }
}
