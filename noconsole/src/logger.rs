//! Logging setup for the noconsole binary and its tests.
//!
//! Logs always go to stderr so they never interleave with the report on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises `env_logger` once. `RUST_LOG` is honoured, defaulting to `warn`;
/// `level`, when given, overrides it for the noconsole crates only.
/// Calling this again is a no-op.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder
            .filter_module("noconsole", level)
            .filter_module("noconsole_core", level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
