//! Run configuration for `noconsole-core`.
//!
//! [`RunOptions`] is built once from the invocation parameters and stays
//! read-only for the lifetime of a run.
//!
//! License: MIT OR Apache-2.0

use std::path::{Path, PathBuf};

/// File pattern used when the caller does not supply one.
pub const DEFAULT_FILE_PATTERN: &str = "**/*.{js,jsx,ts,tsx}";

/// Directory names that are always excluded from the scan.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["node_modules", "dist", "build"];

/// Options controlling a single noconsole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory whose tree is scanned.
    pub root_directory: PathBuf,
    /// Glob selecting the files to scan, relative to `root_directory`.
    pub file_pattern: String,
    /// When set, nothing is written and no confirmation is requested.
    pub dry_run: bool,
    /// Extra directory names to exclude, on top of [`DEFAULT_EXCLUDES`].
    pub exclude_patterns: Vec<String>,
}

impl RunOptions {
    pub fn new<P: AsRef<Path>>(root_directory: P) -> Self {
        Self {
            root_directory: root_directory.as_ref().to_path_buf(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            dry_run: false,
            exclude_patterns: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns.extend(excludes.into_iter().map(Into::into));
        self
    }

    /// Returns the exclusion globs for this run: built-in names first, then user
    /// names, each expanded to `**/<name>/**`. Duplicates and blank entries are dropped.
    pub fn exclude_globs(&self) -> Vec<String> {
        let mut globs: Vec<String> = Vec::new();
        let names = DEFAULT_EXCLUDES
            .iter()
            .copied()
            .chain(self.exclude_patterns.iter().map(String::as_str));

        for name in names {
            let name = name.trim().trim_matches('/');
            if name.is_empty() {
                continue;
            }
            let glob = format!("**/{}/**", name);
            if !globs.contains(&glob) {
                globs.push(glob);
            }
        }
        globs
    }
}
