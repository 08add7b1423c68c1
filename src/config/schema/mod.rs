mod core;
mod observability;
mod storage;
mod sync;

pub use core::Config;
pub use observability::ObservabilityConfig;
pub use storage::StorageConfig;
pub use sync::SyncConfig;
