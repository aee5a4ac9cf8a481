//! Data structures describing what a run found and what it changed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{NoconsoleError, Result};
use crate::scanner::StatementScanner;

/// The statements found in one file during the scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    relative_path: PathBuf,
    matches: Vec<String>,
}

impl ScanResult {
    pub fn new(relative_path: impl Into<PathBuf>, matches: Vec<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            matches,
        }
    }

    /// Scans `content` with `scanner` and records the result for `relative_path`.
    pub fn from_content(
        relative_path: impl Into<PathBuf>,
        content: &str,
        scanner: &dyn StatementScanner,
    ) -> Self {
        Self::new(relative_path, scanner.find_matches(content))
    }

    /// Reads `root/relative_path` and scans it.
    pub fn from_file(
        root: &Path,
        relative_path: &Path,
        scanner: &dyn StatementScanner,
    ) -> Result<Self> {
        let path = root.join(relative_path);
        let content = fs::read_to_string(&path)
            .map_err(|source| NoconsoleError::FileSystem { path, source })?;
        Ok(Self::from_content(relative_path, &content, scanner))
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Totals accumulated over a run and printed once at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_with_matches: usize,
    pub total_matches_removed: usize,
}

impl RunSummary {
    /// Builds the pre-removal summary from the scan pass.
    pub fn from_scan(files_scanned: usize, results: &[ScanResult]) -> Self {
        let with_matches = results.iter().filter(|r| r.has_matches());
        Self {
            files_scanned,
            files_with_matches: with_matches.clone().count(),
            total_matches_removed: with_matches.map(ScanResult::count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::RegexScanner;

    #[test]
    fn summary_only_counts_files_with_matches() {
        let scanner = RegexScanner::new();
        let results = vec![
            ScanResult::from_content("a.js", "console.log(1); console.warn(2);", &scanner),
            ScanResult::from_content("b.js", "let x = 1;", &scanner),
            ScanResult::from_content("c.ts", "console.error(e)", &scanner),
        ];

        let summary = RunSummary::from_scan(4, &results);
        assert_eq!(
            summary,
            RunSummary {
                files_scanned: 4,
                files_with_matches: 2,
                total_matches_removed: 3,
            }
        );
        assert_eq!(results[0].count(), 2);
        assert!(!results[1].has_matches());
    }

    #[test]
    fn from_file_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/app.ts"), "console.debug('x');\n").unwrap();

        let result =
            ScanResult::from_file(dir.path(), Path::new("src/app.ts"), &RegexScanner::new()).unwrap();
        assert_eq!(result.relative_path(), Path::new("src/app.ts"));
        assert_eq!(result.matches(), ["console.debug('x');".to_string()]);
    }

    #[test]
    fn non_utf8_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("legacy.js"), b"console.log('\xff\xfe');\n").unwrap();

        let err = ScanResult::from_file(dir.path(), Path::new("legacy.js"), &RegexScanner::new())
            .unwrap_err();
        match err {
            NoconsoleError::FileSystem { path, source } => {
                assert_eq!(path, dir.path().join("legacy.js"));
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected a FileSystem error, got {:?}", other),
        }
    }
}
