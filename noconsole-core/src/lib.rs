// noconsole-core/src/lib.rs
//! # noconsole Core Library
//!
//! `noconsole-core` holds the platform-independent logic for finding and removing
//! `console.*` debug statements from JavaScript and TypeScript sources. It knows
//! nothing about terminals, prompts or colours; those live in the `noconsole` CLI.
//!
//! ## Modules
//!
//! * `config`: [`RunOptions`], the read-only description of a run.
//! * `collector`: expands the file pattern under the root directory, minus exclusions.
//! * `scanner`: the [`StatementScanner`] trait and its regex implementation.
//! * `scan_result`: [`ScanResult`] per file and the [`RunSummary`] totals.
//! * `remover`: rewrites a file with its statements deleted.
//! * `errors`: the [`NoconsoleError`] enum.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use noconsole_core::{collect_files, RegexScanner, RunOptions, ScanResult};
//!
//! fn main() -> Result<(), noconsole_core::NoconsoleError> {
//!     let options = RunOptions::new("./web").with_dry_run(true);
//!     let scanner = RegexScanner::new();
//!
//!     for file in collect_files(&options)? {
//!         let result = ScanResult::from_file(&options.root_directory, &file, &scanner)?;
//!         println!("{}: {}", result.relative_path().display(), result.count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod collector;
pub mod config;
pub mod errors;
pub mod remover;
pub mod scan_result;
pub mod scanner;

pub use collector::collect_files;
pub use config::{RunOptions, DEFAULT_EXCLUDES, DEFAULT_FILE_PATTERN};
pub use errors::NoconsoleError;
pub use remover::remove_statements;
pub use scan_result::{RunSummary, ScanResult};
pub use scanner::{RegexScanner, StatementScanner, CONSOLE_STATEMENT_PATTERN};
