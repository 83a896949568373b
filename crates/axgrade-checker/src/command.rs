//! Command-chain checker.
//!
//! `CommandChecker` runs each configured step with its stdin closed and its
//! stdout and stderr captured. Output is decoded lossily as UTF-8: bytes that
//! are not valid UTF-8 become U+FFFD and are evaluated as ordinary text.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use axgrade_contracts::{
    checker::CheckerResult,
    error::{GradeError, GradeResult},
};
use axgrade_core::traits::Checker;
use axgrade_policy::{CheckerConfig, CommandStep};

/// A `Checker` backed by external processes.
#[derive(Debug, Clone)]
pub struct CommandChecker {
    steps: Vec<CommandStep>,
    working_dir: Option<PathBuf>,
}

impl CommandChecker {
    pub fn new(steps: Vec<CommandStep>) -> Self {
        Self { steps, working_dir: None }
    }

    /// Build a checker from the `[checker]` section of a grader config.
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self {
            steps: config.steps.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Run every step in `dir` instead of the inherited working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    fn command(&self, step: &CommandStep) -> Command {
        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Checker for CommandChecker {
    /// Run the chain, blocking until the last executed step exits.
    ///
    /// A step that cannot be spawned (missing program, missing working
    /// directory) returns `GradeError::ProcessLaunch`. A step that exits
    /// unsuccessfully ends the chain with a failed `CheckerResult` holding
    /// the output captured so far.
    fn check(&self) -> GradeResult<CheckerResult> {
        if self.steps.is_empty() {
            return Err(GradeError::ConfigError {
                reason: "checker has no command steps".to_string(),
            });
        }

        let mut stdout = String::new();
        let mut stderr = String::new();

        for (index, step) in self.steps.iter().enumerate() {
            debug!(
                step = index,
                program = %step.program,
                args = ?step.args,
                working_dir = ?self.working_dir,
                "running checker step"
            );

            let output = self.command(step).output().map_err(|e| GradeError::ProcessLaunch {
                program: step.program.clone(),
                reason: e.to_string(),
            })?;

            stdout.push_str(&String::from_utf8_lossy(&output.stdout));
            stderr.push_str(&String::from_utf8_lossy(&output.stderr));

            if !output.status.success() {
                warn!(
                    step = index,
                    program = %step.program,
                    status = %output.status,
                    "checker step failed"
                );
                let cause = format!("'{}' {}", step.program, output.status);
                return Ok(CheckerResult::failure(
                    output.status.code(),
                    cause,
                    stdout,
                    stderr,
                ));
            }
        }

        debug!(
            steps = self.steps.len(),
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "checker finished"
        );

        Ok(CheckerResult::success(stdout, stderr))
    }
}
