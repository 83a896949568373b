//! Allow-list types.
//!
//! Checkers report axioms in one of two textual forms, and an allow-list is
//! only meaningful when its entries are written in the same form the checker
//! emits. `AllowedAxiomSet` therefore carries its `OutputForm` with it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, GradeResult};

/// Literal prefix of a full axiom declaration line.
pub const DECLARATION_PREFIX: &str = "axiom ";

/// Sentinel line a bare-name checker prints when a proof depends on nothing.
pub const NO_AXIOMS_SENTINEL: &str = "no axioms";

/// The textual form a checker emits axiom usage in.
///
/// Expressed in TOML as kebab-case:
/// ```toml
/// form = "bare-name"
/// form = "declaration"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputForm {
    /// One axiom name per line, e.g. `propext`. Every non-blank line counts.
    BareName,
    /// Full declarations, e.g. `axiom propext : Π {a b : Prop}, (a <-> b) -> a = b`.
    /// Only lines starting with `axiom ` count; anything else is checker chatter.
    Declaration,
}

impl OutputForm {
    /// Return true if `line` (already known to be non-blank) should be
    /// compared against the allow-list.
    pub fn is_candidate(&self, line: &str) -> bool {
        match self {
            OutputForm::BareName => true,
            OutputForm::Declaration => line.starts_with(DECLARATION_PREFIX),
        }
    }
}

/// The immutable set of axiom lines a passing submission may use.
///
/// Always non-empty. Entries are compared verbatim against checker output
/// lines, so they must be spelled exactly as the checker prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedAxiomSet {
    form: OutputForm,
    axioms: BTreeSet<String>,
}

impl AllowedAxiomSet {
    /// Build an allow-list in the given form.
    ///
    /// Returns `GradeError::ConfigError` if `axioms` yields nothing.
    pub fn new<I, S>(form: OutputForm, axioms: I) -> GradeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let axioms: BTreeSet<String> = axioms.into_iter().map(Into::into).collect();
        if axioms.is_empty() {
            return Err(GradeError::ConfigError {
                reason: "allow-list must contain at least one axiom".to_string(),
            });
        }
        Ok(Self { form, axioms })
    }

    /// The output form entries are expressed in.
    pub fn form(&self) -> OutputForm {
        self.form
    }

    /// Return true if `line` is exactly one of the allowed entries.
    pub fn contains(&self, line: &str) -> bool {
        self.axioms.contains(line)
    }

    /// Iterate over allowed entries in sorted order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.axioms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}
