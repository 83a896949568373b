//! Verdicts and the report framing markers the downstream grader parses.

use serde::{Deserialize, Serialize};

/// Prefix of a report for a checker that failed or could not run.
pub const ERROR_MARKER: &str = "<ERROR::>";

/// Prefix of a report for a submission that uses only allowed axioms.
pub const PASSED_MARKER: &str = "<PASSED::>";

/// Prefix of a report for a submission that uses a forbidden axiom.
pub const FAILED_MARKER: &str = "<FAILED::>";

/// Line-break token understood by the downstream grader. Reports never use a
/// raw newline between forbidden axioms.
pub const LINE_BREAK_TOKEN: &str = "<:LF:>";

/// Label placed before informational checker stderr.
pub const STDERR_LABEL: &str = "STDERR:";

/// The classification of one checker run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum Verdict {
    /// Every axiom the checker reported is on the allow-list.
    Passed,

    /// At least one reported axiom is not on the allow-list.
    Failed {
        /// Offending lines in order of appearance, one entry per occurrence.
        forbidden: Vec<String>,
    },

    /// The checker exited with failure or never launched. Output was not scanned.
    Errored {
        cause: String,
    },
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

/// A verdict together with the display message the grader receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub message: String,
}
