use super::model::{Grievance, SecretMessage};
use super::score::calculate_love_score;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CACHE_VERSION: u32 = 1;
pub const DEFAULT_CACHE_SLOT: &str = "grievance-storage";

fn default_cache_version() -> u32 {
    CACHE_VERSION
}

/// Collections owned by the store, in most-recent-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalState {
    #[serde(default)]
    pub grievances: Vec<Grievance>,
    #[serde(default)]
    pub secret_messages: Vec<SecretMessage>,
}

/// On-disk layout of a cache slot.
///
/// `love_score` is written for external readers only; it is recomputed from
/// the grievances on load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheSnapshot {
    #[serde(default = "default_cache_version")]
    version: u32,
    #[serde(flatten)]
    state: JournalState,
    #[serde(default)]
    love_score: Option<u8>,
}

/// Durable JSON cache for a named slot.
#[derive(Debug, Clone)]
pub struct JournalCache {
    path: PathBuf,
}

impl JournalCache {
    /// Cache stored as `<dir>/<slot>.json`.
    pub fn in_dir(dir: &Path, slot: &str) -> Self {
        Self {
            path: dir.join(format!("{slot}.json")),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the slot. A missing file is an empty journal.
    pub fn load(&self) -> Result<JournalState, StoreError> {
        if !self.path.exists() {
            return Ok(JournalState::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::CacheRead {
            path: self.path.clone(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(JournalState::default());
        }

        let snapshot: CacheSnapshot =
            serde_json::from_str(&contents).map_err(|source| StoreError::CacheParse {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.version != CACHE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                expected: CACHE_VERSION,
            });
        }

        Ok(snapshot.state)
    }

    /// Replace the slot contents with `state`.
    ///
    /// Writes go to a sibling temp file first so a crash mid-write leaves the
    /// previous snapshot intact.
    pub fn save(&self, state: &JournalState) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|source| StoreError::CacheWrite {
            path: parent.to_path_buf(),
            source,
        })?;

        let snapshot = CacheSnapshot {
            version: CACHE_VERSION,
            state: state.clone(),
            love_score: Some(calculate_love_score(&state.grievances)),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|source| StoreError::CacheWrite {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::CacheWrite {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
