//! # axgrade-verify
//!
//! Verdict evaluation for the axgrade harness.
//!
//! This crate provides [`engine::AxiomEvaluator`], which implements the
//! [`axgrade_core::traits::Evaluator`] trait, and the free function
//! [`engine::evaluate`] it delegates to. Classification runs in two phases:
//!
//! 1. **Exit status** — a failed checker run is `Errored`; output is not read.
//! 2. **Axiom scan** — candidate stdout lines are checked against the
//!    allow-list and every non-member is collected, in order.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use axgrade_contracts::axiom::{AllowedAxiomSet, OutputForm};
//! use axgrade_contracts::checker::CheckerResult;
//! use axgrade_verify::engine::evaluate;
//!
//! let allowed = AllowedAxiomSet::new(OutputForm::BareName, ["no axioms", "propext"])?;
//! let (verdict, message) = evaluate(&CheckerResult::success("propext\n", ""), &allowed);
//! ```

pub mod engine;
pub mod message;

pub use engine::{evaluate, AxiomEvaluator};
