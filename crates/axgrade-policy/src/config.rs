//! Grader configuration schema and loading.
//!
//! A `GraderConfig` is deserialized from TOML and holds the allow-list plus
//! the checker invocation that produces output in the allow-list's form.
//!
//! Example:
//! ```toml
//! [allow_list]
//! form = "bare-name"
//! axioms = ["no axioms", "propext", "quot.sound", "classical.choice"]
//!
//! [checker]
//! working_dir = "src"
//!
//! [[checker.steps]]
//! program = "lean"
//! args = ["SolutionTest.lean"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use axgrade_contracts::{
    axiom::{AllowedAxiomSet, OutputForm},
    error::{GradeError, GradeResult},
};

/// The allow-list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListConfig {
    /// The form the checker prints axioms in; entries must use the same form.
    pub form: OutputForm,

    /// Exact lines that are acceptable. Must not be empty.
    pub axioms: Vec<String>,
}

/// One command in the checker chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStep {
    /// Program name or path, resolved through `PATH` like a shell would.
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

/// The checker section.
///
/// Steps run in declaration order. The chain stops at the first step that
/// fails, like `a && b` in a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Directory every step runs in. Relative paths resolve against the
    /// harness's own working directory. Absent means "inherit".
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Ordered command chain. Must not be empty.
    pub steps: Vec<CommandStep>,
}

/// The top-level structure deserialized from a TOML grader file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraderConfig {
    pub allow_list: AllowListConfig,
    pub checker: CheckerConfig,
}

impl GraderConfig {
    /// Parse `s` as TOML and validate it.
    ///
    /// Returns `GradeError::ConfigError` if the TOML is malformed, does not
    /// match the expected schema, or fails `validate()`.
    pub fn from_toml_str(s: &str) -> GradeResult<Self> {
        let config: GraderConfig = toml::from_str(s).map_err(|e| GradeError::ConfigError {
            reason: format!("failed to parse grader TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            form = ?config.allow_list.form,
            axioms = config.allow_list.axioms.len(),
            steps = config.checker.steps.len(),
            "grader config loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as grader configuration.
    pub fn from_file(path: &Path) -> GradeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GradeError::ConfigError {
            reason: format!("failed to read grader config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject configurations the harness cannot run.
    pub fn validate(&self) -> GradeResult<()> {
        if self.allow_list.axioms.is_empty() {
            return Err(GradeError::ConfigError {
                reason: "allow_list.axioms must contain at least one axiom".to_string(),
            });
        }
        if self.checker.steps.is_empty() {
            return Err(GradeError::ConfigError {
                reason: "checker.steps must contain at least one command".to_string(),
            });
        }
        if let Some(step) = self.checker.steps.iter().find(|s| s.program.trim().is_empty()) {
            return Err(GradeError::ConfigError {
                reason: format!("checker step with args {:?} has an empty program", step.args),
            });
        }
        Ok(())
    }

    /// Build the immutable allow-list this configuration describes.
    pub fn allowed_set(&self) -> GradeResult<AllowedAxiomSet> {
        AllowedAxiomSet::new(self.allow_list.form, self.allow_list.axioms.iter().cloned())
    }
}
