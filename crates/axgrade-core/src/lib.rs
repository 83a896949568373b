//! # axgrade-core
//!
//! The single-run grading harness.
//!
//! This crate provides:
//! - The three seam traits (`Checker`, `Evaluator`, `ReportSink`)
//! - The `Harness` that wires them together in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axgrade_core::{Harness, traits::{Checker, Evaluator, ReportSink}};
//! ```

pub mod harness;
pub mod traits;

pub use harness::Harness;
