//! # axgrade-contracts
//!
//! Shared types and error contracts for the axgrade harness.
//!
//! All crates in the workspace import from here. No grading logic lives in
//! this crate — only data definitions, constructors, and error types.

pub mod axiom;
pub mod checker;
pub mod error;
pub mod run;
pub mod verdict;
