//! This file defines the command-line interface (CLI) for the noconsole application.

use clap::Parser;
use std::path::PathBuf;

use noconsole_core::{RunOptions, DEFAULT_FILE_PATTERN};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "noconsole",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove console.log statements from your codebase",
    long_about = "noconsole walks a directory, finds console.log/debug/info/warn/error calls in JavaScript and TypeScript sources, and deletes them in place after confirmation. Use --dry-run to preview what would be removed without touching any file."
)]
pub struct Cli {
    /// Directory to process.
    #[arg(value_name = "DIRECTORY", help = "Directory to process")]
    pub directory: PathBuf,

    /// Glob selecting the files to scan, relative to DIRECTORY.
    #[arg(
        long,
        short = 'p',
        value_name = "GLOB",
        default_value = DEFAULT_FILE_PATTERN,
        env = "NOCONSOLE_PATTERN",
        help = "File pattern to match"
    )]
    pub pattern: String,

    /// Preview the statements that would be removed without writing anything.
    #[arg(long = "dry-run", short = 'd', help = "Show what would be removed without making changes")]
    pub dry_run: bool,

    /// Extra directory names to skip, on top of node_modules, dist and build.
    #[arg(
        long,
        short = 'e',
        value_name = "NAMES",
        num_args = 1..,
        value_delimiter = ',',
        help = "Additional directories to exclude (each applied as **/<name>/**)"
    )]
    pub exclude: Vec<String>,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y', help = "Remove statements without asking for confirmation")]
    pub yes: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG for the noconsole crates).
    #[arg(long, help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// Builds the core run options from the parsed arguments.
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new(&self.directory)
            .with_pattern(self.pattern.clone())
            .with_dry_run(self.dry_run)
            .with_excludes(self.exclude.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["noconsole", "web"]).unwrap();
        let opts = cli.run_options();
        assert_eq!(opts.root_directory, PathBuf::from("web"));
        assert_eq!(opts.file_pattern, DEFAULT_FILE_PATTERN);
        assert!(!opts.dry_run);
        assert!(!cli.yes);
        assert!(opts.exclude_patterns.is_empty());
    }

    #[test]
    fn short_flags_and_excludes() {
        let cli = Cli::try_parse_from([
            "noconsole", "web", "-d", "-p", "src/**/*.js", "-e", "vendor", "coverage,tmp",
        ])
        .unwrap();
        let opts = cli.run_options();
        assert!(opts.dry_run);
        assert_eq!(opts.file_pattern, "src/**/*.js");
        assert_eq!(opts.exclude_patterns, vec!["vendor", "coverage", "tmp"]);
    }

    #[test]
    fn directory_is_required() {
        assert!(Cli::try_parse_from(["noconsole"]).is_err());
    }
}
