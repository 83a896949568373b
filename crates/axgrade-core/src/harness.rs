//! The axgrade harness: one submission, one synchronous check.
//!
//! The harness enforces the grading order:
//!
//!   Checker → Evaluator → ReportSink
//!
//! The checker is the only environment-dependent step. Everything after it
//! is a pure function of the `CheckerResult` and the allow-list, so a run
//! can be replayed from captured output with an identical verdict.

use chrono::Utc;
use tracing::{debug, info, warn};

use axgrade_contracts::{
    axiom::AllowedAxiomSet,
    checker::CheckerResult,
    error::{GradeError, GradeResult},
    run::{RunId, RunRecord},
    verdict::Verdict,
};

use crate::traits::{Checker, Evaluator, ReportSink};

/// Drives a single grading run.
///
/// Owns the three collaborators and the allow-list. `run()` may be called
/// more than once; each call is an independent run with its own `RunId`.
pub struct Harness {
    checker: Box<dyn Checker>,
    evaluator: Box<dyn Evaluator>,
    sink: Box<dyn ReportSink>,
    allowed: AllowedAxiomSet,
}

impl Harness {
    pub fn new(
        checker: Box<dyn Checker>,
        evaluator: Box<dyn Evaluator>,
        sink: Box<dyn ReportSink>,
        allowed: AllowedAxiomSet,
    ) -> Self {
        Self { checker, evaluator, sink, allowed }
    }

    /// Run the checker, classify its output, and publish the report.
    ///
    /// # Pipeline
    ///
    /// 1. Call `checker.check()` and block until it returns
    ///    - `ProcessLaunch` errors become a failed `CheckerResult`, so they
    ///      surface as an `Errored` verdict instead of aborting the run
    /// 2. Call `evaluator.evaluate()` against the allow-list
    /// 3. Build the `RunRecord` and hand it to `sink.write()`
    ///
    /// # Errors
    ///
    /// Returns `Err` only for failures of the harness itself: checker
    /// configuration errors and report write failures. Forbidden axioms and
    /// checker failures are verdicts, not errors.
    pub fn run(&self) -> GradeResult<RunRecord> {
        let run_id = RunId::new();
        let started_at = Utc::now();

        debug!(
            run_id = %run_id,
            form = ?self.allowed.form(),
            allowed = self.allowed.len(),
            "grading run starting"
        );

        // ── Step 1: Invoke the checker ───────────────────────────────────────
        let result = match self.checker.check() {
            Ok(result) => result,
            Err(GradeError::ProcessLaunch { program, reason }) => {
                warn!(run_id = %run_id, %program, %reason, "checker could not be launched");
                CheckerResult::launch_failure(format!(
                    "failed to launch checker '{program}': {reason}"
                ))
            }
            Err(e) => return Err(e),
        };

        // ── Step 2: Classify ─────────────────────────────────────────────────
        let evaluation = self.evaluator.evaluate(&result, &self.allowed);

        match &evaluation.verdict {
            Verdict::Passed => info!(run_id = %run_id, "submission passed"),
            Verdict::Failed { forbidden } => info!(
                run_id = %run_id,
                forbidden_count = forbidden.len(),
                "submission uses forbidden axioms"
            ),
            Verdict::Errored { cause } => info!(run_id = %run_id, %cause, "checker errored"),
        }

        // ── Step 3: Publish ──────────────────────────────────────────────────
        let record = RunRecord {
            run_id,
            started_at,
            finished_at: Utc::now(),
            verdict: evaluation.verdict,
            message: evaluation.message,
            stderr: result.stderr,
            checker_succeeded: result.exit.is_success(),
        };
        self.sink.write(&record)?;

        Ok(record)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
