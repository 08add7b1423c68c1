use std::path::PathBuf;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the grievance journal.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; application glue continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum JournalError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Store / cache ───────────────────────────────────────────────────
    #[error("store: {0}")]
    Store(#[from] StoreError),

    // ── Remote replication ──────────────────────────────────────────────
    #[error("sync: {0}")]
    Sync(#[from] SyncError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Store errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("failed to read cache {}: {source}", path.display())]
    CacheRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cache {}: {source}", path.display())]
    CacheParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write cache {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode cache: {0}")]
    CacheEncode(#[from] serde_json::Error),

    #[error("unsupported cache version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

// ─── Sync errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{method} {endpoint} request failed: {message}")]
    Request {
        method: &'static str,
        endpoint: String,
        message: String,
    },

    #[error("{method} {endpoint} returned status {status}")]
    Status {
        method: &'static str,
        endpoint: String,
        status: u16,
    },

    #[error("replication queue closed")]
    QueueClosed,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, JournalError>;
