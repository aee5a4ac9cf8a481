//! remover.rs - Writes files back with their console statements deleted.
//!
//! License: MIT OR APACHE 2.0

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::errors::{NoconsoleError, Result};
use crate::scan_result::ScanResult;
use crate::scanner::StatementScanner;

/// Removes the statements recorded in `result` from the file under `root`.
///
/// In dry-run mode the file is neither read nor written and the scanned count is
/// returned. Otherwise the file is read again, every match is deleted, and the
/// file is overwritten in place; the return value is the number of statements
/// actually removed. There is no rollback if the write fails.
pub fn remove_statements(
    root: &Path,
    result: &ScanResult,
    scanner: &dyn StatementScanner,
    dry_run: bool,
) -> Result<usize> {
    if dry_run {
        return Ok(result.count());
    }

    let path = root.join(result.relative_path());
    let content = fs::read_to_string(&path).map_err(|source| NoconsoleError::FileSystem {
        path: path.clone(),
        source,
    })?;

    let (stripped, removed) = scanner.strip(&content);
    if removed != result.count() {
        warn!(
            "{} changed since it was scanned: expected {} statement(s), removing {}.",
            result.relative_path().display(),
            result.count(),
            removed
        );
    }
    if removed == 0 {
        return Ok(0);
    }

    fs::write(&path, stripped).map_err(|source| NoconsoleError::Io {
        path: path.clone(),
        source,
    })?;
    info!("Removed {} statement(s) from {}", removed, path.display());
    Ok(removed)
}
