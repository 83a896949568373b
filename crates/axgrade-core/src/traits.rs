//! Seam traits for the grading pipeline.
//!
//! - `Checker`    — external collaborator (runs the proof checker)
//! - `Evaluator`  — pure classifier (turns checker output into a verdict)
//! - `ReportSink` — reporting channel (where the framed report goes)
//!
//! The harness calls them in that order, exactly once per run.

use axgrade_contracts::{
    axiom::AllowedAxiomSet,
    checker::CheckerResult,
    error::GradeResult,
    run::RunRecord,
    verdict::Evaluation,
};

/// The external proof checker.
///
/// Implementations block until the checker has finished. There is no timeout:
/// a checker that hangs hangs the harness.
pub trait Checker: Send + Sync {
    /// Run the checker once and return its exit status and captured output.
    ///
    /// A process that starts and exits non-zero is a successful call that
    /// returns a failed `CheckerResult`. Return `GradeError::ProcessLaunch`
    /// when the process could not be started at all.
    fn check(&self) -> GradeResult<CheckerResult>;
}

/// Classifies a completed checker run against an allow-list.
///
/// Implementations must be pure: no I/O, and the same inputs always produce
/// the same `Evaluation`.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, result: &CheckerResult, allowed: &AllowedAxiomSet) -> Evaluation;
}

/// Receives the record of a finished run and publishes it.
pub trait ReportSink: Send + Sync {
    /// Write the report for `record`. A failed write is fatal for the run.
    fn write(&self, record: &RunRecord) -> GradeResult<()>;
}
