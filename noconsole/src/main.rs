// noconsole/src/main.rs
//! noconsole entry point.
//!
//! Parses arguments, sets up logging and the theme, runs the orchestrator and
//! turns any error into a message on stderr and exit code 1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use is_terminal::IsTerminal;
use log::{debug, LevelFilter};
use std::io;
use std::process;

use noconsole::cli::Cli;
use noconsole::logger;
use noconsole::run_noconsole;
use noconsole::ui::output_format::print_error_message;
use noconsole::ui::theme::{build_theme_map, ThemeStyle};
use noconsole::utils::confirm::{Confirmer, FixedAnswer, PromptConfirmer};
use noconsole_core::RegexScanner;

fn run(cli: &Cli) -> Result<()> {
    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;
    let options = cli.run_options();
    debug!("Run options: {:?}", options);

    let mut confirmer: Box<dyn Confirmer> = if cli.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(PromptConfirmer::stdio())
    };

    let stdout = io::stdout();
    let enable_colors = stdout.is_terminal();
    let mut out = stdout.lock();

    let outcome = run_noconsole(
        &options,
        &RegexScanner::new(),
        confirmer.as_mut(),
        &mut out,
        &theme_map,
        enable_colors,
    )?;
    debug!("Run finished: {:?}", outcome);
    Ok(())
}

/// Parses the command line. Help and version keep clap's own exit path; every
/// usage error exits with 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_cli();
    logger::init_logger(cli.debug.then_some(LevelFilter::Debug));
    debug!("noconsole started. Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        let stderr = io::stderr();
        let enable_colors = stderr.is_terminal();
        let _ = print_error_message(
            &mut stderr.lock(),
            &format!("Error: {:#}", e),
            &ThemeStyle::default_theme_map(),
            enable_colors,
        );
        process::exit(1);
    }
}
