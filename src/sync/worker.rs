use super::queue::IntentReceiver;
use super::traits::RemoteSync;
use crate::config::SyncConfig;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// How many times the worker tries each intent before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retry.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Outcome counts reported when the queue closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicationStats {
    pub delivered: u64,
    pub failed: u64,
}

/// Drain `rx` in order, delivering each intent through `remote`.
///
/// Failures are logged and dropped after the last attempt. The task ends
/// once every queue handle has been dropped and the backlog is empty.
pub fn spawn_replication_worker(
    remote: Arc<dyn RemoteSync>,
    mut rx: IntentReceiver,
    policy: RetryPolicy,
) -> JoinHandle<ReplicationStats> {
    tokio::spawn(async move {
        let mut stats = ReplicationStats::default();
        let max_attempts = policy.max_attempts.max(1);

        while let Some(intent) = rx.recv().await {
            let mut backoff = policy.initial_backoff;
            let mut attempt: u32 = 1;

            loop {
                match remote.replicate(&intent).await {
                    Ok(()) => {
                        tracing::debug!(
                            remote = remote.name(),
                            kind = intent.kind(),
                            id = %intent.record_id(),
                            attempt,
                            "sync.delivered"
                        );
                        stats.delivered += 1;
                        break;
                    }
                    Err(error) if attempt < max_attempts => {
                        tracing::debug!(
                            remote = remote.name(),
                            kind = intent.kind(),
                            attempt,
                            %error,
                            "sync.retry"
                        );
                        tokio::time::sleep(backoff).await;
                        backoff = backoff.saturating_mul(2);
                        attempt += 1;
                    }
                    Err(error) => {
                        tracing::warn!(
                            remote = remote.name(),
                            kind = intent.kind(),
                            id = %intent.record_id(),
                            attempts = attempt,
                            %error,
                            "sync.failed"
                        );
                        stats.failed += 1;
                        break;
                    }
                }
            }
        }

        tracing::debug!(
            delivered = stats.delivered,
            failed = stats.failed,
            "sync.worker_stopped"
        );
        stats
    })
}
