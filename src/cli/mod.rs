//! Command Line Interface (CLI) layer for pwaicons.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves parameters,
//! installs logging and reports the outcome of a generator run.
//!
//! If you are embedding pwaicons into another application, prefer using
//! the high-level `pwaicons::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
