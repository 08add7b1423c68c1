use super::super::{ObservabilityConfig, StorageConfig, SyncConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default data directory - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Directory holding the journal cache, honoring `storage.data_dir`.
    pub fn cache_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let slot = self.storage.slot.trim();
        if slot.is_empty() {
            return Err(ConfigError::Validation("storage.slot cannot be empty".into()));
        }
        if slot.contains(['/', '\\']) || slot.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "storage.slot '{slot}' must be a plain file name"
            )));
        }

        if self.sync.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "sync.max_attempts must be at least 1".into(),
            ));
        }

        if self.sync.enabled {
            let url = self.sync.base_url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "sync.base_url '{url}' must be an http(s) URL"
                )));
            }
        }

        if self.observability.tracing_level().is_none() {
            return Err(ConfigError::Validation(format!(
                "observability.log_level '{}' is not a log level",
                self.observability.log_level
            )));
        }

        Ok(())
    }
}
