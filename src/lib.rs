#![forbid(unsafe_code)]
//! suiterun, a sequential batch runner for example suites
//!
//! A suite is an ordered list of named example directories, each containing a
//! fixed entry-point script. `suiterun` executes the entry points one at a
//! time with the working directory scoped to each example's directory,
//! classifies every attempt by child exit status, and renders an aggregate
//! summary. The process exit code is nonzero when any attempted example
//! failed.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `runner` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod manifest;
pub mod runner;

pub use manifest::Manifest;
pub use runner::{ItemOutcome, RunRecord, RunSummary, WorkItem};
