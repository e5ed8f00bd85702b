//! Tunables for the discover lists.
//!
//! Defaults match the mobile app: 20 rows per page, pages counted from 1,
//! and a 300 ms pause before a search term is committed.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_INITIAL_PAGE: usize = 1;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryConfig {
    /// Rows materialized per page.
    pub page_size: usize,
    /// Page number a fresh or reset query starts on.
    pub initial_page: usize,
    /// Delay between the last keystroke and the committed search term.
    pub debounce_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_page: DEFAULT_INITIAL_PAGE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl QueryConfig {
    /// Parses and validates a JSON document. Missing keys take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: QueryConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::ConfigNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            page_size = config.page_size,
            debounce_ms = config.debounce_ms,
            "loaded query config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "pageSize must be greater than zero".to_string(),
            ));
        }
        if self.initial_page == 0 {
            return Err(CatalogError::InvalidConfig(
                "initialPage must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_mobile_app() {
        let config = QueryConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.initial_page, 1);
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = QueryConfig::from_json_str(r#"{"pageSize": 50}"#).expect("parse");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.initial_page, 1);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = QueryConfig::from_json_str(r#"{"pageSize": 0}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
    }

    #[test]
    fn zero_initial_page_is_rejected() {
        let err = QueryConfig::from_json_str(r#"{"initialPage": 0}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = QueryConfig::from_json_str("{pageSize").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"debounceMs": 150}}"#).expect("write");
        let config = QueryConfig::load(file.path()).expect("load");
        assert_eq!(config.debounce_delay(), Duration::from_millis(150));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("query.json");
        let err = QueryConfig::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigNotFound(p) if p == path));
    }
}
