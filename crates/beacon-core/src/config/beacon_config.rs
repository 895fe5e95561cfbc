//! Top-level Beacon configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, CollectorConfig, LoggingConfig};
use crate::errors::ConfigError;

pub const ENV_ENDPOINT: &str = "BEACON_ENDPOINT";
pub const ENV_TRACKING_ID: &str = "BEACON_TRACKING_ID";
pub const ENV_CLIENT_ID: &str = "BEACON_CLIENT_ID";
pub const ENV_TIMEOUT_SECS: &str = "BEACON_TIMEOUT_SECS";
pub const ENV_LOG_FILTER: &str = "BEACON_LOG_FILTER";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BEACON_*`)
/// 2. Project config (`beacon.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeaconConfig {
    pub collector: CollectorConfig,
    pub logging: LoggingConfig,
}

impl BeaconConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;

        tracing::debug!(
            endpoint = %config.collector.endpoint,
            "config: resolved beacon config"
        );
        Ok(config)
    }

    /// Parse a single TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `BEACON_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.collector.endpoint = endpoint;
        }
        if let Some(tracking_id) = lookup(ENV_TRACKING_ID) {
            self.collector.session_tracking_id = tracking_id;
        }
        if let Some(client_id) = lookup(ENV_CLIENT_ID) {
            self.collector.session_client_id = client_id;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
            self.collector.timeout_secs = Some(secs);
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.collector.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "collector.endpoint".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "collector.endpoint".to_string(),
                message: "must be an http:// or https:// URL".to_string(),
            });
        }
        if self.collector.session_tracking_id.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "collector.session_tracking_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.collector.session_client_id.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "collector.session_client_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.collector.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "collector.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
