//! Harness error types.
//!
//! These cover failures of the harness itself. A submission that uses a
//! forbidden axiom, or a checker that exits non-zero, is NOT an error here:
//! both are ordinary verdicts.

use thiserror::Error;

/// The unified error type for the axgrade harness.
#[derive(Debug, Error)]
pub enum GradeError {
    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The external checker program could not be started.
    ///
    /// The harness turns this into an `Errored` verdict rather than aborting.
    #[error("failed to launch checker '{program}': {reason}")]
    ProcessLaunch { program: String, reason: String },

    /// Captured checker output could not be read.
    #[error("failed to read checker output from {origin}: {reason}")]
    InputRead { origin: String, reason: String },

    /// The report could not be written to the reporting channel.
    #[error("report write failed: {reason}")]
    ReportWriteFailed { reason: String },
}

/// Convenience alias used throughout the axgrade crates.
pub type GradeResult<T> = Result<T, GradeError>;
