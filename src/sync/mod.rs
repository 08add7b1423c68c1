pub mod http;
pub mod http_client;
pub mod intent;
pub mod queue;
pub mod traits;
pub mod worker;

pub use http::HttpRemote;
pub use intent::{ActionPayload, GrievancePatch, MessagePatch, ReplicationIntent};
pub use queue::{IntentReceiver, ReplicationQueue};
pub use traits::RemoteSync;
pub use worker::{ReplicationStats, RetryPolicy, spawn_replication_worker};

use crate::config::SyncConfig;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Running replication pipeline: the queue handle for the store and the
/// worker draining it.
pub struct Replication {
    pub queue: ReplicationQueue,
    pub worker: Option<JoinHandle<ReplicationStats>>,
}

impl Replication {
    pub fn disabled() -> Self {
        Self {
            queue: ReplicationQueue::disabled(),
            worker: None,
        }
    }
}

/// Start the HTTP replication worker described by `config`, or a disabled
/// pipeline when sync is turned off. Must be called inside a tokio runtime.
pub fn start_replication(config: &SyncConfig) -> Replication {
    if !config.enabled {
        tracing::debug!("sync.disabled");
        return Replication::disabled();
    }

    let remote = HttpRemote::new(http_client::build_sync_client(config), &config.base_url);
    tracing::debug!(base_url = %remote.base_url(), "sync.started");

    let (queue, rx) = ReplicationQueue::channel();
    let worker = spawn_replication_worker(Arc::new(remote), rx, RetryPolicy::from_config(config));
    Replication {
        queue,
        worker: Some(worker),
    }
}
