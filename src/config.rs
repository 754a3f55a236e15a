//! Runtime settings from the environment (and an optional `.env` file).
//!
//! | variable             | meaning                                   | default          |
//! |----------------------|-------------------------------------------|------------------|
//! | `INSIGHT_LOG`        | tracing filter directives                 | `insight_dash=info` |
//! | `INSIGHT_LOG_FILE`   | log file used while the TUI owns stdout   | `insight.log`    |
//! | `INSIGHT_SEED`       | fixed seed for the synthetic series       | unset (entropy)  |
//! | `INSIGHT_TOAST_SECS` | toast display time in seconds             | `3`              |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::upload::DEFAULT_TOAST_DURATION;

pub const DEFAULT_LOG_FILTER: &str = "insight_dash=info";
pub const DEFAULT_LOG_FILE: &str = "insight.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_filter: Option<String>,
    pub log_file: PathBuf,
    pub seed: Option<u64>,
    pub toast_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            seed: None,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (empty values count as unset).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Settings::default();

        settings.log_filter = get("INSIGHT_LOG");
        if let Some(path) = get("INSIGHT_LOG_FILE") {
            settings.log_file = PathBuf::from(path);
        }
        if let Some(raw) = get("INSIGHT_SEED") {
            let seed = raw
                .parse::<u64>()
                .map_err(|e| AppError::usage(format!("Invalid INSIGHT_SEED '{raw}': {e}")))?;
            settings.seed = Some(seed);
        }
        if let Some(raw) = get("INSIGHT_TOAST_SECS") {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| AppError::usage(format!("Invalid INSIGHT_TOAST_SECS '{raw}': {e}")))?;
            settings.toast_duration = Duration::from_secs(secs);
        }

        Ok(settings)
    }

    /// CLI flags win over the environment.
    #[must_use]
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.toast_duration, Duration::from_secs(3));
    }

    #[test]
    fn reads_all_keys() {
        let settings = Settings::from_lookup(lookup(&[
            ("INSIGHT_LOG", "insight_dash=debug"),
            ("INSIGHT_LOG_FILE", "/tmp/dash.log"),
            ("INSIGHT_SEED", "17"),
            ("INSIGHT_TOAST_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(settings.log_filter.as_deref(), Some("insight_dash=debug"));
        assert_eq!(settings.log_file, PathBuf::from("/tmp/dash.log"));
        assert_eq!(settings.seed, Some(17));
        assert_eq!(settings.toast_duration, Duration::from_secs(5));
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = Settings::from_lookup(lookup(&[("INSIGHT_SEED", "  ")])).unwrap();
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn bad_seed_is_a_usage_error() {
        let err = Settings::from_lookup(lookup(&[("INSIGHT_SEED", "abc")])).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn cli_seed_overrides_env() {
        let settings = Settings::from_lookup(lookup(&[("INSIGHT_SEED", "1")])).unwrap();
        assert_eq!(settings.clone().with_seed_override(Some(9)).seed, Some(9));
        assert_eq!(settings.with_seed_override(None).seed, Some(1));
    }
}
