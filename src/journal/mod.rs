pub mod cache;
pub mod catalog;
pub mod model;
pub mod score;
pub mod store;

pub use cache::{JournalCache, JournalState};
pub use catalog::{ActionIcon, SuggestedAction, suggested_actions_for_mood};
pub use model::{Grievance, GrievanceDraft, GrievanceFilter, MoodLevel, SecretMessage};
pub use score::calculate_love_score;
pub use store::{JournalStore, JournalSummary};
