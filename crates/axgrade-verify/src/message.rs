//! Report message framing.
//!
//! The downstream grader tokenizes on the literal markers from
//! `axgrade_contracts::verdict`, never on real line breaks, so forbidden
//! axioms are joined with `<:LF:>`.

use axgrade_contracts::verdict::{
    ERROR_MARKER, FAILED_MARKER, LINE_BREAK_TOKEN, PASSED_MARKER,
};

/// Confirmation phrase of a passing report.
pub const PASSED_PHRASE: &str = "No forbidden axioms";

/// Header of a failing report, before the first `<:LF:>`.
pub const FAILED_HEADER: &str = "Forbidden axioms detected:";

/// Advice appended to every error report.
pub const ERROR_HINT: &str =
    "Make sure your solution compiles and does not contain 'sorry'.";

pub fn passed() -> String {
    format!("{PASSED_MARKER}{PASSED_PHRASE}")
}

pub fn failed(forbidden: &[String]) -> String {
    let mut message = format!("{FAILED_MARKER}{FAILED_HEADER}");
    for line in forbidden {
        message.push_str(LINE_BREAK_TOKEN);
        message.push_str(line);
    }
    message
}

/// Error report. Ends with a newline so the grader sees a trailing blank line
/// once the report is printed.
pub fn errored(cause: &str) -> String {
    format!("{ERROR_MARKER}There was an error checking your solution ({cause}). {ERROR_HINT}\n")
}
