//! The noconsole run: collect, scan, report, confirm, remove, summarise.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use noconsole_core::{
    collect_files, remove_statements, RunOptions, RunSummary, ScanResult, StatementScanner,
};

use crate::ui::reporter::Reporter;
use crate::ui::theme::ThemeMap;
use crate::utils::confirm::Confirmer;

/// How a run that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No file contained a console statement.
    NothingFound,
    /// The user declined the confirmation prompt; nothing was written.
    Cancelled,
    Completed(RunSummary),
}

/// Runs noconsole over `options.root_directory`.
///
/// Every error aborts the run where it happens. Files rewritten before the
/// failure stay rewritten.
pub fn run_noconsole(
    options: &RunOptions,
    scanner: &dyn StatementScanner,
    confirmer: &mut dyn Confirmer,
    out: &mut dyn Write,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<RunOutcome> {
    info!(
        "Starting noconsole run in {} (dry run: {}).",
        options.root_directory.display(),
        options.dry_run
    );
    let root = options.root_directory.as_path();
    let mut reporter = Reporter::new(out, theme_map, enable_colors);

    let files = collect_files(options)
        .with_context(|| format!("Failed to collect files under {}", root.display()))?;

    let mut results = Vec::new();
    for file in &files {
        let result = ScanResult::from_file(root, file, scanner)
            .with_context(|| format!("Failed to scan {}", file.display()))?;
        if result.has_matches() {
            debug!("{}: {} match(es)", file.display(), result.count());
            results.push(result);
        }
    }

    let scan_summary = RunSummary::from_scan(files.len(), &results);
    if scan_summary.files_with_matches == 0 {
        debug!("Scanned {} file(s), nothing to remove.", files.len());
        reporter.nothing_found()?;
        return Ok(RunOutcome::NothingFound);
    }

    for result in &results {
        reporter.file(result, options.dry_run)?;
    }
    reporter.scan_summary(&scan_summary)?;

    if !options.dry_run {
        let question = reporter.prompt(&scan_summary);
        if !confirmer.confirm(&question, true)? {
            info!("User declined; no files modified.");
            reporter.cancelled()?;
            return Ok(RunOutcome::Cancelled);
        }
    }

    let mut summary = RunSummary {
        files_scanned: files.len(),
        files_with_matches: results.len(),
        total_matches_removed: 0,
    };
    for result in &results {
        let removed = remove_statements(root, result, scanner, options.dry_run).with_context(
            || format!("Failed to remove statements from {}", result.relative_path().display()),
        )?;
        if !options.dry_run {
            reporter.removed(result.relative_path(), removed)?;
        }
        summary.total_matches_removed += removed;
    }

    reporter.final_summary(&summary, options.dry_run)?;
    info!("noconsole run completed: {:?}", summary);
    Ok(RunOutcome::Completed(summary))
}
