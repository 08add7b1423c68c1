pub mod schema;

pub use schema::{Config, ObservabilityConfig, StorageConfig, SyncConfig};
