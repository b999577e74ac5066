//! Command Line Interface (CLI) layer for the capsheet binary.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the two-stage gallery flow.
//! It wires user-provided options to the underlying library functionality
//! exposed via `capsheet::api`.
//!
//! If you are embedding capsheet into another application, prefer using
//! the high-level `capsheet::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
