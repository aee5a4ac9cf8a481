// noconsole/src/lib.rs
//! # noconsole CLI
//!
//! Terminal front end for `noconsole-core`: argument parsing, the themed report,
//! the confirmation prompt and the run orchestration.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::noconsole::{run_noconsole, RunOutcome};
