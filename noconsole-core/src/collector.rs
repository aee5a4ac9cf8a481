//! collector.rs - Discovers the files a run should scan.
//!
//! The walk is driven by `ignore::WalkBuilder` with every standard filter turned
//! off except hidden entries, so `.gitignore` files have no say in what gets
//! scanned. The file pattern and the exclusions are compiled into a single
//! override matcher: the pattern whitelists files, and each exclusion is added
//! after it as a negated glob so it always wins.
//!
//! Override globs follow gitignore rules, where a glob without a `/` matches at
//! any depth. The file pattern is anchored at the root first so `*.js` selects
//! only top-level files, as a plain glob would.
//!
//! Symbolic links are not followed while walking: a link to a file is collected
//! like the file itself (and rewritten through the link), a link to a directory
//! is skipped.
//!
//! License: MIT OR APACHE 2.0

use std::fs;
use std::path::{Path, PathBuf};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use log::debug;

use crate::config::RunOptions;
use crate::errors::{NoconsoleError, Result};

/// Returns every regular file under `options.root_directory` that matches the file
/// pattern and no exclusion, relative to the root and sorted by path.
///
/// Nothing is read or written: only directory listings are touched.
pub fn collect_files(options: &RunOptions) -> Result<Vec<PathBuf>> {
    let root = options.root_directory.as_path();

    let metadata = fs::metadata(root).map_err(|source| NoconsoleError::FileSystem {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(NoconsoleError::NotADirectory(root.to_path_buf()));
    }

    let overrides = build_overrides(root, &options.file_pattern, &options.exclude_globs())?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .overrides(overrides)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !is_regular_file(&entry) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        debug!("Collected {}", relative.display());
        files.push(relative);
    }

    debug!(
        "Collected {} file(s) under {} with pattern '{}'.",
        files.len(),
        root.display(),
        options.file_pattern
    );
    Ok(files)
}

fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false),
        _ => false,
    }
}

/// Turns the user's file pattern into an override glob rooted at the walk root.
///
/// `./` is dropped and a pattern without any `/` gets a leading one, which is how
/// gitignore syntax spells "relative to the root only".
fn anchor_pattern(pattern: &str) -> String {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    if pattern.contains('/') {
        pattern.to_string()
    } else {
        format!("/{}", pattern)
    }
}

/// Compiles the file pattern and exclusion globs into one override matcher.
///
/// Exclusions of the form `**/<name>/**` also get a directory-only twin
/// (`**/<name>/`) so excluded trees are pruned instead of walked.
fn build_overrides(root: &Path, pattern: &str, exclude_globs: &[String]) -> Result<Override> {
    let mut builder = OverrideBuilder::new(root);

    builder.add(&anchor_pattern(pattern)).map_err(|source| NoconsoleError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    for glob in exclude_globs {
        let mut negated = vec![format!("!{}", glob)];
        if let Some(dir) = glob.strip_suffix("**") {
            negated.push(format!("!{}", dir));
        }
        for line in negated {
            builder.add(&line).map_err(|source| NoconsoleError::Pattern {
                pattern: glob.clone(),
                source,
            })?;
        }
    }

    builder.build().map_err(|source| NoconsoleError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}
