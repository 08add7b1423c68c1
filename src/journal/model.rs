use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood attached to a grievance, from 1 (most negative) to 5 (most positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, StoreError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(StoreError::Validation(format!(
                "mood level must be between {} and {}, got {level}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Upset",
            2 => "Upset",
            3 => "Neutral",
            4 => "Good",
            _ => "Great",
        }
    }

    /// Every mood level, most negative first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// A logged complaint with its resolution state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grievance {
    pub id: String,
    pub reason: String,
    pub mood_level: MoodLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_should_have_done: Option<String>,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub is_forgiven: bool,
    #[serde(default)]
    pub actions_taken: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
}

/// Caller-side input for a new grievance.
///
/// Construction is the validation boundary: a draft always carries a
/// non-blank reason, and blank optional text is normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceDraft {
    reason: String,
    mood_level: MoodLevel,
    what_should_have_done: Option<String>,
}

impl GrievanceDraft {
    pub fn new(
        reason: impl Into<String>,
        mood_level: MoodLevel,
        what_should_have_done: Option<String>,
    ) -> Result<Self, StoreError> {
        let reason = reason.into();
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(StoreError::Validation("reason cannot be empty".into()));
        }

        let what_should_have_done = what_should_have_done.and_then(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        Ok(Self {
            reason: reason.to_string(),
            mood_level,
            what_should_have_done,
        })
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn mood_level(&self) -> MoodLevel {
        self.mood_level
    }

    pub fn what_should_have_done(&self) -> Option<&str> {
        self.what_should_have_done.as_deref()
    }

    pub(crate) fn into_grievance(self, id: String, date_created: DateTime<Utc>) -> Grievance {
        Grievance {
            id,
            reason: self.reason,
            mood_level: self.mood_level,
            what_should_have_done: self.what_should_have_done,
            date_created,
            is_forgiven: false,
            actions_taken: Vec::new(),
            resolution_notes: None,
        }
    }
}

/// A private note with a read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretMessage {
    pub id: String,
    pub message: String,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

/// History filter over grievance resolution state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GrievanceFilter {
    #[default]
    All,
    Pending,
    Forgiven,
}

impl GrievanceFilter {
    pub fn matches(self, grievance: &Grievance) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !grievance.is_forgiven,
            Self::Forgiven => grievance.is_forgiven,
        }
    }
}
