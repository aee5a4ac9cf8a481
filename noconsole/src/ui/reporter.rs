//! Human-readable report of a noconsole run.
//!
//! All output goes through the injected writer so callers decide where the
//! report lands (stdout for the binary, a `Vec<u8>` in tests).

use std::io::{self, Write};
use std::path::Path;

use noconsole_core::{RunSummary, ScanResult};

use crate::ui::output_format::{
    print_info_message, print_message, print_success_message, print_warn_message, styled,
};
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub struct Reporter<'a> {
    out: &'a mut dyn Write,
    theme_map: &'a ThemeMap,
    enable_colors: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(out: &'a mut dyn Write, theme_map: &'a ThemeMap, enable_colors: bool) -> Self {
        Self {
            out,
            theme_map,
            enable_colors,
        }
    }

    fn paint(&self, text: &str, entry: ThemeEntry) -> String {
        styled(text, entry, self.theme_map, self.enable_colors)
    }

    /// Lists one file from the scan pass. A dry run shows every statement that
    /// would go; a real run shows only the count.
    pub fn file(&mut self, result: &ScanResult, dry_run: bool) -> io::Result<()> {
        let path = result.relative_path().display().to_string();
        if dry_run {
            let path = self.paint(&path, ThemeEntry::FileName);
            writeln!(self.out)?;
            writeln!(self.out, "File: {}", path)?;
            for statement in result.matches() {
                let statement = self.paint(statement, ThemeEntry::WouldRemove);
                writeln!(self.out, "  Would remove: {}", statement)?;
            }
        } else {
            let path = self.paint(&path, ThemeEntry::FileName);
            let count = self.paint(&result.count().to_string(), ThemeEntry::MatchCount);
            writeln!(self.out, "{}: {} console statement(s)", path, count)?;
        }
        Ok(())
    }

    pub fn scan_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        print_info_message(
            &mut *self.out,
            &format!(
                "Found {} console statement(s) in {} of {} file(s).",
                summary.total_matches_removed, summary.files_with_matches, summary.files_scanned
            ),
            self.theme_map,
            self.enable_colors,
        )
    }

    pub fn nothing_found(&mut self) -> io::Result<()> {
        print_info_message(
            &mut *self.out,
            "No console statements found.",
            self.theme_map,
            self.enable_colors,
        )
    }

    pub fn cancelled(&mut self) -> io::Result<()> {
        print_warn_message(
            &mut *self.out,
            "Operation cancelled. No files were modified.",
            self.theme_map,
            self.enable_colors,
        )
    }

    pub fn removed(&mut self, relative_path: &Path, count: usize) -> io::Result<()> {
        print_success_message(
            &mut *self.out,
            &format!(
                "Removed {} console statements from {}",
                count,
                relative_path.display()
            ),
            self.theme_map,
            self.enable_colors,
        )
    }

    pub fn final_summary(&mut self, summary: &RunSummary, dry_run: bool) -> io::Result<()> {
        writeln!(self.out)?;
        print_message(
            &mut *self.out,
            "Summary:",
            ThemeEntry::Header,
            self.theme_map,
            self.enable_colors,
        )?;
        writeln!(self.out, "Files processed: {}", summary.files_scanned)?;
        writeln!(
            self.out,
            "Files containing console statements: {}",
            summary.files_with_matches
        )?;
        let total = self.paint(&summary.total_matches_removed.to_string(), ThemeEntry::MatchCount);
        writeln!(
            self.out,
            "Total console statements {}removed: {}",
            if dry_run { "that would be " } else { "" },
            total
        )?;
        if dry_run {
            writeln!(self.out)?;
            print_info_message(
                &mut *self.out,
                "This was a dry run. No files were modified.",
                self.theme_map,
                self.enable_colors,
            )?;
        }
        Ok(())
    }

    /// The confirmation question, styled as a prompt.
    pub fn prompt(&self, summary: &RunSummary) -> String {
        self.paint(&confirmation_question(summary), ThemeEntry::Prompt)
    }
}

/// The question put to the user before any file is rewritten.
pub fn confirmation_question(summary: &RunSummary) -> String {
    format!(
        "Remove {} console statement(s) from {} file(s)?",
        summary.total_matches_removed, summary.files_with_matches
    )
}
