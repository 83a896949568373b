//! Run identity and the record produced for each harness run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::verdict::Verdict;

/// Unique identifier for a single harness run.
///
/// Appears in log events and in the JSON report so a grading pipeline can
/// correlate the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub uuid::Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything a report sink needs to render the outcome of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: RunId,
    /// Wall-clock time the checker was invoked (UTC).
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the verdict was produced (UTC).
    pub finished_at: DateTime<Utc>,
    pub verdict: Verdict,
    /// The framed message for the downstream grader.
    pub message: String,
    /// Checker stderr, kept verbatim. Informational only.
    pub stderr: String,
    /// True when the checker exited successfully. Stderr is only surfaced
    /// for successful runs.
    pub checker_succeeded: bool,
}
