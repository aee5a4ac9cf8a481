//! errors.rs - Custom error types for the noconsole-core library.
//!
//! Every fallible operation in the core returns a [`NoconsoleError`], so the
//! CLI can add context once and report the failure at the top level.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `noconsole-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking callers
/// that match on it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NoconsoleError {
    /// The root directory is missing, or a directory or file could not be read.
    #[error("Failed to read '{}'", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A rewritten file could not be written back.
    #[error("Failed to write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    /// The directory walk failed somewhere below the root.
    #[error("Failed to walk directory tree")]
    Walk(#[from] ignore::Error),
}

/// Convenience alias used throughout the core.
pub type Result<T, E = NoconsoleError> = std::result::Result<T, E>;
