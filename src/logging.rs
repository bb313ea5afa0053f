//! Console logging for the command-line tool.
//!
//! The library only uses the `log` facade; the binary decides where records go.
//! The default level is `info` (`debug` with `--verbose`) and `RUST_LOG`
//! overrides both:
//!
//! ```bash
//! RUST_LOG=content_analyser=debug content-analyser analyse catalog.json
//! ```

use anyhow::{Context as _, Result};

/// Initializes `env_logger` once at startup.
///
/// # Errors
///
/// Returns error if a logger has already been installed.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_target(verbose)
        .try_init()
        .context("Failed to initialize logging")
}
