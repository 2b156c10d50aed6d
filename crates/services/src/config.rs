use std::env;
use std::time::Duration;

use storage::sqlite::normalize_sqlite_url;

use crate::error::ConfigError;

/// Delay before the assistant answers.
pub const DEFAULT_ASSISTANT_DELAY: Duration = Duration::from_millis(1500);

const DB_URL_VAR: &str = "PYLEARN_DB_URL";
const ASSISTANT_DELAY_VAR: &str = "PYLEARN_ASSISTANT_DELAY_MS";

/// Runtime settings for `AppServices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SQLite` URL; `None` keeps all state in memory.
    pub db_url: Option<String>,
    pub assistant_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_url: None,
            assistant_delay: DEFAULT_ASSISTANT_DELAY,
        }
    }
}

impl AppConfig {
    /// Read `PYLEARN_DB_URL` and `PYLEARN_ASSISTANT_DELAY_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAssistantDelay` if the delay is not a
    /// whole number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_url = lookup(DB_URL_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| normalize_sqlite_url(&raw));

        let assistant_delay = match lookup(ASSISTANT_DELAY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidAssistantDelay { raw })?,
            None => DEFAULT_ASSISTANT_DELAY,
        };

        Ok(Self {
            db_url,
            assistant_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_in_memory_and_standard_delay() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
        assert_eq!(config(&[(DB_URL_VAR, "  ")]).unwrap().db_url, None);
    }

    #[test]
    fn reads_db_url_and_delay() {
        let cfg = config(&[
            (DB_URL_VAR, "/tmp/pylearn.db"),
            (ASSISTANT_DELAY_VAR, "0"),
        ])
        .unwrap();
        assert_eq!(cfg.db_url.as_deref(), Some("sqlite:///tmp/pylearn.db?mode=rwc"));
        assert_eq!(cfg.assistant_delay, Duration::ZERO);
    }

    #[test]
    fn rejects_non_numeric_delay() {
        assert_eq!(
            config(&[(ASSISTANT_DELAY_VAR, "soon")]).unwrap_err(),
            ConfigError::InvalidAssistantDelay { raw: "soon".into() }
        );
    }
}
