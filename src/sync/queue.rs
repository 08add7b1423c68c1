use super::intent::ReplicationIntent;
use tokio::sync::mpsc;

pub type IntentReceiver = mpsc::UnboundedReceiver<ReplicationIntent>;

/// Outbound handle the store uses to hand off replication intents.
///
/// Enqueueing never blocks and never fails the caller. A disabled queue, or
/// one whose worker has stopped, drops intents.
#[derive(Debug, Clone)]
pub struct ReplicationQueue {
    tx: Option<mpsc::UnboundedSender<ReplicationIntent>>,
}

impl ReplicationQueue {
    /// Create a live queue and the receiver a worker drains.
    pub fn channel() -> (Self, IntentReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Queue that drops every intent (sync turned off).
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    pub fn enqueue(&self, intent: ReplicationIntent) {
        let Some(tx) = &self.tx else {
            tracing::trace!(kind = intent.kind(), "sync.disabled_drop");
            return;
        };

        if let Err(mpsc::error::SendError(intent)) = tx.send(intent) {
            tracing::debug!(
                kind = intent.kind(),
                id = %intent.record_id(),
                "sync.queue_closed_drop"
            );
        }
    }
}
