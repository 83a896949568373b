//! # axgrade-policy
//!
//! Allow-list and checker configuration for the axgrade harness.
//!
//! ## Overview
//!
//! This crate provides [`GraderConfig`], loaded from TOML or taken from one
//! of the built-in [`preset::PRESETS`]. A config produces the immutable
//! [`AllowedAxiomSet`](axgrade_contracts::axiom::AllowedAxiomSet) the
//! evaluator checks against, and the command chain the checker runs.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use axgrade_policy::GraderConfig;
//!
//! let config = GraderConfig::from_file(Path::new("grader.toml"))?;
//! let allowed = config.allowed_set()?;
//! ```

pub mod config;
pub mod preset;

pub use config::{AllowListConfig, CheckerConfig, CommandStep, GraderConfig};
pub use preset::{Preset, DEFAULT_PRESET, PRESETS};

// ── Tests ─────────────────────────────────────────────────────────────────────
