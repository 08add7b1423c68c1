use super::intent::ReplicationIntent;
use crate::error::SyncError;
use std::future::Future;
use std::pin::Pin;

/// Remote mirror for committed journal changes.
///
/// Implementations deliver a single intent and report the outcome; the
/// replication worker owns retries and logging. Local state never depends on
/// the result.
pub trait RemoteSync: Send + Sync {
    /// Human-readable backend name (e.g. "http")
    fn name(&self) -> &str;

    /// Deliver one intent to the remote service.
    fn replicate<'a>(
        &'a self,
        intent: &'a ReplicationIntent,
    ) -> Pin<Box<dyn Future<Output = Result<(), SyncError>> + Send + 'a>>;
}
