#![allow(dead_code)]

use tempfile::TempDir;

use grievance_journal::journal::{GrievanceDraft, JournalCache, JournalStore, MoodLevel};
use grievance_journal::sync::ReplicationQueue;

pub const SLOT: &str = "grievance-storage";

/// Journal rooted in a temp directory that lives as long as the harness.
pub struct JournalHarness {
    pub dir: TempDir,
}

impl JournalHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn cache(&self) -> JournalCache {
        JournalCache::in_dir(self.dir.path(), SLOT)
    }

    pub fn open(&self, queue: ReplicationQueue) -> JournalStore {
        JournalStore::open(self.cache(), queue).expect("open journal")
    }

    pub fn open_offline(&self) -> JournalStore {
        self.open(ReplicationQueue::disabled())
    }
}

pub fn draft(reason: &str, mood: u8) -> GrievanceDraft {
    GrievanceDraft::new(reason, MoodLevel::new(mood).expect("mood"), None).expect("draft")
}

pub fn draft_with_hint(reason: &str, mood: u8, hint: &str) -> GrievanceDraft {
    GrievanceDraft::new(
        reason,
        MoodLevel::new(mood).expect("mood"),
        Some(hint.to_string()),
    )
    .expect("draft")
}
