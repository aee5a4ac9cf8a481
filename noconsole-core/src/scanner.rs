//! scanner.rs - Finds and strips console statements in source text.
//!
//! The `StatementScanner` trait keeps the orchestration code independent of how
//! statements are recognised. [`RegexScanner`] is the only implementation: one
//! global regex, compiled once per process.
//!
//! The argument list is matched as "anything but `)`", so a call whose
//! arguments contain a `)` is cut at the first one:
//! `console.error("x(y)")` matches `console.error("x(y)` and leaves `")` behind.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// `console.log/debug/info/warn/error(...)` with an optional trailing `;`.
/// The argument list may not contain `)`.
pub const CONSOLE_STATEMENT_PATTERN: &str = r"console\.(log|debug|info|warn|error)\s*\([^)]*\)\s*;?";

lazy_static! {
    static ref CONSOLE_STATEMENT_REGEX: Regex =
        Regex::new(CONSOLE_STATEMENT_PATTERN).expect("console statement pattern is valid");
}

/// Recognises debug-log statements in file contents.
pub trait StatementScanner {
    /// Returns every matched statement, in order of appearance.
    fn find_matches(&self, content: &str) -> Vec<String>;

    /// Returns `content` with every matched statement deleted, together with the
    /// number of statements removed.
    fn strip(&self, content: &str) -> (String, usize);
}

/// Regex-backed [`StatementScanner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScanner;

impl RegexScanner {
    pub fn new() -> Self {
        Self
    }

    fn regex(&self) -> &'static Regex {
        &CONSOLE_STATEMENT_REGEX
    }
}

impl StatementScanner for RegexScanner {
    fn find_matches(&self, content: &str) -> Vec<String> {
        let matches: Vec<String> = self
            .regex()
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect();
        debug!("Scanner found {} console statement(s).", matches.len());
        matches
    }

    fn strip(&self, content: &str) -> (String, usize) {
        let removed = self.regex().find_iter(content).count();
        if removed == 0 {
            return (content.to_string(), 0);
        }
        let stripped = self.regex().replace_all(content, "").into_owned();
        (stripped, removed)
    }
}
