//! Configuration System
//!
//! Dashboard settings persisted as JSON in browser local storage.
//! Build-time environment variables provide the defaults:
//! - FLEET_DASHBOARD_API_BASE
//! - FLEET_DASHBOARD_LOG_LEVEL
//!
//! Values saved from the Settings page take precedence over those defaults.

use serde::{Deserialize, Serialize};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Local storage key holding the serialized config
pub const STORAGE_KEY: &str = "fleet_dashboard_config";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base() -> String {
    option_env!("FLEET_DASHBOARD_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

fn default_log_level() -> String {
    option_env!("FLEET_DASHBOARD_LOG_LEVEL")
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            log_level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    /// Parse a stored config document
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    /// Load from local storage, falling back to defaults.
    ///
    /// Runs before logging is initialized, so problems are returned alongside
    /// the config for the caller to report once a subscriber exists.
    pub fn load() -> (Self, Option<ConfigError>) {
        let storage = match local_storage() {
            Some(storage) => storage,
            None => return (Self::default(), Some(ConfigError::StorageUnavailable)),
        };

        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            Ok(None) => (Self::default(), None),
            Err(_) => (Self::default(), Some(ConfigError::StorageUnavailable)),
        }
    }

    /// Persist to local storage
    pub fn save(&self) -> Result<(), ConfigError> {
        let storage = local_storage().ok_or(ConfigError::StorageUnavailable)?;
        let raw = serde_json::to_string(self)?;
        storage
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| ConfigError::Write(format!("{:?}", e)))
    }

    /// Trim whitespace and trailing slashes from the API base
    pub fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        if self.api_base.is_empty() {
            self.api_base = default_api_base();
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
        self
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Browser local storage is unavailable")]
    StorageUnavailable,

    #[error("Failed to parse stored config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write config: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = DashboardConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config =
            DashboardConfig::from_json(r#"{"api_base": "http://fleet.local:3000/"}"#).unwrap();
        assert_eq!(config.api_base, "http://fleet.local:3000");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = DashboardConfig::from_json(r#"{"api_base": "  ", "log_level": ""}"#).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
