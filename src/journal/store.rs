use super::cache::{JournalCache, JournalState};
use super::model::{Grievance, GrievanceDraft, GrievanceFilter, SecretMessage};
use super::score::calculate_love_score;
use crate::error::StoreError;
use crate::sync::{ActionPayload, GrievancePatch, MessagePatch, ReplicationIntent, ReplicationQueue};
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// Dashboard counts derived from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalSummary {
    pub total_grievances: usize,
    pub pending_grievances: usize,
    pub forgiven_grievances: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
    pub love_score: u8,
}

/// Single source of truth for grievances and secret messages.
///
/// Every mutation commits to memory, rewrites the cache, then enqueues a
/// replication intent. Remote delivery happens elsewhere and never feeds back
/// into local state. Unknown ids are silent no-ops.
pub struct JournalStore {
    state: JournalState,
    cache: JournalCache,
    replication: ReplicationQueue,
}

impl JournalStore {
    /// Restore the journal from `cache` (empty if the slot does not exist).
    pub fn open(cache: JournalCache, replication: ReplicationQueue) -> Result<Self, StoreError> {
        let state = cache.load()?;
        tracing::debug!(
            path = %cache.path().display(),
            grievances = state.grievances.len(),
            messages = state.secret_messages.len(),
            "journal.opened"
        );
        Ok(Self {
            state,
            cache,
            replication,
        })
    }

    // ── Reads ───────────────────────────────────────────────────────────

    /// Grievances, most recent first.
    pub fn grievances(&self) -> &[Grievance] {
        &self.state.grievances
    }

    /// Secret messages, most recent first.
    pub fn secret_messages(&self) -> &[SecretMessage] {
        &self.state.secret_messages
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub fn cache_path(&self) -> &Path {
        self.cache.path()
    }

    pub fn grievance(&self, id: &str) -> Option<&Grievance> {
        self.state.grievances.iter().find(|g| g.id == id)
    }

    pub fn secret_message(&self, id: &str) -> Option<&SecretMessage> {
        self.state.secret_messages.iter().find(|m| m.id == id)
    }

    /// Full grievance id for an exact id or a unique prefix.
    pub fn resolve_grievance_id(&self, prefix: &str) -> Option<&str> {
        unique_prefix_match(self.state.grievances.iter().map(|g| g.id.as_str()), prefix)
    }

    /// Full message id for an exact id or a unique prefix.
    pub fn resolve_message_id(&self, prefix: &str) -> Option<&str> {
        unique_prefix_match(
            self.state.secret_messages.iter().map(|m| m.id.as_str()),
            prefix,
        )
    }

    pub fn grievances_matching(
        &self,
        filter: GrievanceFilter,
    ) -> impl Iterator<Item = &Grievance> + '_ {
        self.state
            .grievances
            .iter()
            .filter(move |g| filter.matches(g))
    }

    pub fn love_score(&self) -> u8 {
        calculate_love_score(&self.state.grievances)
    }

    pub fn summary(&self) -> JournalSummary {
        let total_grievances = self.state.grievances.len();
        let forgiven_grievances = self
            .state
            .grievances
            .iter()
            .filter(|g| g.is_forgiven)
            .count();
        let unread_messages = self
            .state
            .secret_messages
            .iter()
            .filter(|m| !m.is_read)
            .count();

        JournalSummary {
            total_grievances,
            pending_grievances: total_grievances - forgiven_grievances,
            forgiven_grievances,
            total_messages: self.state.secret_messages.len(),
            unread_messages,
            love_score: self.love_score(),
        }
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn add_grievance(&mut self, draft: GrievanceDraft) -> Result<&Grievance, StoreError> {
        let grievance = draft.into_grievance(Uuid::new_v4().to_string(), Utc::now());
        tracing::info!(
            id = %grievance.id,
            mood = grievance.mood_level.value(),
            "journal.grievance_added"
        );

        self.state.grievances.insert(0, grievance.clone());
        self.commit(ReplicationIntent::CreateGrievance { grievance })?;
        Ok(&self.state.grievances[0])
    }

    /// Mark a grievance forgiven, attaching `resolution_notes` when given.
    ///
    /// Forgiving an already forgiven grievance keeps it forgiven and
    /// replicates again.
    pub fn forgive_grievance(
        &mut self,
        id: &str,
        resolution_notes: Option<String>,
    ) -> Result<(), StoreError> {
        let Some(grievance) = self.state.grievances.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(id, "journal.forgive_unknown_id");
            return Ok(());
        };

        grievance.is_forgiven = true;
        if let Some(notes) = resolution_notes {
            grievance.resolution_notes = Some(notes);
        }
        let patch = GrievancePatch {
            is_forgiven: true,
            resolution_notes: grievance.resolution_notes.clone(),
        };
        tracing::info!(id, "journal.grievance_forgiven");

        self.commit(ReplicationIntent::UpdateGrievance {
            id: id.to_string(),
            patch,
        })
    }

    pub fn add_action_taken(
        &mut self,
        grievance_id: &str,
        action: impl Into<String>,
    ) -> Result<(), StoreError> {
        let Some(grievance) = self
            .state
            .grievances
            .iter_mut()
            .find(|g| g.id == grievance_id)
        else {
            tracing::debug!(id = grievance_id, "journal.action_unknown_id");
            return Ok(());
        };

        let action = action.into();
        grievance.actions_taken.push(action.clone());
        tracing::info!(
            id = grievance_id,
            count = grievance.actions_taken.len(),
            "journal.action_added"
        );

        self.commit(ReplicationIntent::AppendGrievanceAction {
            id: grievance_id.to_string(),
            action: ActionPayload { action },
        })
    }

    /// Add a secret message. Blank text is ignored and yields `None`.
    pub fn add_secret_message(
        &mut self,
        text: &str,
    ) -> Result<Option<&SecretMessage>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("journal.blank_message_ignored");
            return Ok(None);
        }

        let message = SecretMessage {
            id: Uuid::new_v4().to_string(),
            message: text.to_string(),
            date_created: Utc::now(),
            is_read: false,
        };
        tracing::info!(id = %message.id, "journal.message_added");

        self.state.secret_messages.insert(0, message.clone());
        self.commit(ReplicationIntent::CreateSecretMessage { message })?;
        Ok(self.state.secret_messages.first())
    }

    /// Mark a message read. Already-read and unknown messages are untouched.
    pub fn mark_message_as_read(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(message) = self.state.secret_messages.iter_mut().find(|m| m.id == id) else {
            tracing::debug!(id, "journal.read_unknown_id");
            return Ok(());
        };
        if message.is_read {
            return Ok(());
        }

        message.is_read = true;
        tracing::info!(id, "journal.message_read");

        self.commit(ReplicationIntent::UpdateSecretMessage {
            id: id.to_string(),
            patch: MessagePatch { is_read: true },
        })
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Write the current state to the cache.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.cache.save(&self.state)
    }

    /// Flush and release the replication handle. Pending intents stay with
    /// the worker.
    pub fn close(self) -> Result<(), StoreError> {
        self.flush()?;
        tracing::debug!(path = %self.cache.path().display(), "journal.closed");
        Ok(())
    }

    /// Persist the already-applied change, then hand the intent to the
    /// replication queue. Nothing is replicated if the cache write fails.
    fn commit(&self, intent: ReplicationIntent) -> Result<(), StoreError> {
        self.flush()?;
        self.replication.enqueue(intent);
        Ok(())
    }
}

fn unique_prefix_match<'a>(
    ids: impl Iterator<Item = &'a str>,
    prefix: &str,
) -> Option<&'a str> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return None;
    }

    let mut matches = Vec::new();
    for id in ids {
        if id == prefix {
            return Some(id);
        }
        if id.starts_with(prefix) {
            matches.push(id);
        }
    }

    match matches.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}
