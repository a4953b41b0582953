// lexfreq/src/logger.rs
//! Logger initialization for the lexfreq binary.
//!
//! Library code logs through the `log` facade; this module wires it to
//! `env_logger`. An explicit level (from `-q`/`-d`) overrides `RUST_LOG`;
//! otherwise the environment decides, defaulting to warnings only.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes the global logger, writing to stderr.
///
/// Safe to call at most once per process; subsequent calls are ignored so
/// tests that drive the CLI in-process do not panic.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
