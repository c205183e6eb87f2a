use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::selection_service::DEFAULT_MAX_HISTORY;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Published CSV feed. Takes precedence over `catalog_file`.
    pub catalog_url: Option<String>,
    pub catalog_file: Option<PathBuf>,
    pub catalog_ttl: Duration,
    pub fetch_timeout: Duration,
    pub history_limit: usize,
    /// Idle time after which a session is forgotten. Zero keeps sessions forever.
    pub session_ttl: Duration,
    pub thinking_delay: Duration,
    pub selection_seed: Option<u64>,
    pub audit_log_path: Option<PathBuf>,
    /// Takes precedence over `audit_log_path`
    pub audit_webhook_url: Option<String>,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let parsed = |key: &str| var(key).and_then(|v| v.parse::<u64>().ok());

        Self {
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8000),
            catalog_url: var("CATALOG_URL"),
            catalog_file: var("CATALOG_FILE").map(PathBuf::from),
            catalog_ttl: Duration::from_secs(parsed("CATALOG_TTL_SECS").unwrap_or(60)),
            fetch_timeout: Duration::from_secs(parsed("FETCH_TIMEOUT_SECS").unwrap_or(5)),
            history_limit: parsed("HISTORY_LIMIT")
                .map(|n| n as usize)
                .unwrap_or(DEFAULT_MAX_HISTORY),
            session_ttl: Duration::from_secs(parsed("SESSION_TTL_SECS").unwrap_or(1800)),
            thinking_delay: Duration::from_millis(parsed("THINKING_DELAY_MS").unwrap_or(0)),
            selection_seed: parsed("SELECTION_SEED"),
            audit_log_path: var("AUDIT_LOG_PATH").map(PathBuf::from),
            audit_webhook_url: var("AUDIT_WEBHOOK_URL"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.catalog_ttl, Duration::from_secs(60));
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.thinking_delay, Duration::ZERO);
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert!(config.catalog_url.is_none());
        assert!(config.selection_seed.is_none());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = config_with(&[
            ("PORT", "9100"),
            ("HISTORY_LIMIT", "1"),
            ("THINKING_DELAY_MS", "1200"),
            ("CATALOG_URL", "   "),
            ("SELECTION_SEED", "42"),
            ("SESSION_TTL_SECS", "0"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]);

        assert_eq!(config.port, 9100);
        assert_eq!(config.history_limit, 1);
        assert_eq!(config.thinking_delay, Duration::from_millis(1200));
        assert!(config.catalog_url.is_none());
        assert_eq!(config.selection_seed, Some(42));
        assert_eq!(config.session_ttl, Duration::ZERO);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_with(&[("PORT", "not-a-port"), ("CATALOG_TTL_SECS", "-5")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.catalog_ttl, Duration::from_secs(60));
    }
}
