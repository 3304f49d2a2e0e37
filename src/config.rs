//! Runtime configuration read from the environment.
//!
//! `.env` is loaded by the binary before [`Config::from_env`] runs, so either
//! source works. Command-line flags take precedence over both.

use crate::dataset::DEFAULT_DATASET_URL;

pub const DEFAULT_LOG_FILE_PATH: &str = "logs/auto_sales_dashboard.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL or local path of the sales CSV (`DATASET_SOURCE`).
    pub dataset_source: String,
    /// Rolling JSON log file (`LOG_FILE_PATH`).
    pub log_file_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            dataset_source: non_blank("DATASET_SOURCE")
                .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string()),
            log_file_path: non_blank("LOG_FILE_PATH")
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string()),
        }
    }

    /// Replaces the dataset source when `source` is given.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        if let Some(source) = source {
            self.dataset_source = source;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.dataset_source, DEFAULT_DATASET_URL);
        assert_eq!(config.log_file_path, DEFAULT_LOG_FILE_PATH);
    }

    #[test]
    fn test_env_values_and_blank_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATASET_SOURCE", "data/sales.csv"),
            ("LOG_FILE_PATH", "  "),
        ]));
        assert_eq!(config.dataset_source, "data/sales.csv");
        assert_eq!(config.log_file_path, DEFAULT_LOG_FILE_PATH);
    }

    #[test]
    fn test_cli_source_overrides() {
        let config = Config::from_lookup(lookup_from(&[("DATASET_SOURCE", "a.csv")]))
            .with_source(Some("b.csv".into()));
        assert_eq!(config.dataset_source, "b.csv");

        let config = config.with_source(None);
        assert_eq!(config.dataset_source, "b.csv");
    }
}
