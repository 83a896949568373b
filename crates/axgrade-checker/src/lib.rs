//! # axgrade-checker
//!
//! Runs the external proof checker for the axgrade harness.
//!
//! [`CommandChecker`] implements [`axgrade_core::traits::Checker`] by running
//! an ordered chain of commands with `std::process::Command`, blocking until
//! each finishes. The chain behaves like `a && b` in a shell: it stops at the
//! first step that exits non-zero, and the captured output of every step that
//! ran is concatenated.
//!
//! No timeout, retry, or sandboxing is applied.

pub mod command;

pub use command::CommandChecker;
