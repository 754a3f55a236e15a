//! Tracing setup.
//!
//! The TUI owns the terminal, so while it runs logs go to a file; the plain CLI
//! commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{DEFAULT_LOG_FILTER, Settings};
use crate::error::AppError;

static TRACING_INIT: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Resolve the filter: `INSIGHT_LOG`, then `RUST_LOG`, then the crate default.
pub fn build_filter(explicit: Option<&str>) -> Result<EnvFilter, AppError> {
    match explicit {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| AppError::usage(format!("Invalid INSIGHT_LOG '{directives}': {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(settings: &Settings, target: LogTarget) -> Result<(), AppError> {
    if TRACING_INIT.is_completed() {
        return Ok(());
    }

    let filter = build_filter(settings.log_filter.as_deref())?;

    match target {
        LogTarget::Stderr => {
            TRACING_INIT.call_once(|| {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            });
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    AppError::runtime(format!("Failed to open log file '{}': {e}", path.display()))
                })?;
            TRACING_INIT.call_once(|| {
                fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            });
        }
    }

    tracing::debug!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_validated() {
        assert!(build_filter(Some("insight_dash=debug")).is_ok());
        let err = build_filter(Some("insight_dash=notalevel")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn default_filter_builds() {
        assert!(build_filter(None).is_ok());
    }
}
