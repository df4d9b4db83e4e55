//! Debug tracing, switched on by the `VALID_DEBUG` environment variable.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ValidError};

pub const DEBUG_ENV: &str = "VALID_DEBUG";

/// Whether a `VALID_DEBUG` setting turns debug output on.
#[must_use]
pub fn debug_enabled(setting: Option<&str>) -> bool {
    matches!(setting, Some("true" | "1" | "yes"))
}

/// Installs a stderr subscriber at debug level. Does nothing when `enabled` is false.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ValidError::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
