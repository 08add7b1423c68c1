use crate::journal::cache::DEFAULT_CACHE_SLOT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Cache slot name; the journal is stored as `<data_dir>/<slot>.json`
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Overrides the default `~/.grievance-journal/data`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_slot() -> String {
    DEFAULT_CACHE_SLOT.into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            data_dir: None,
        }
    }
}
