use crate::journal::model::{Grievance, SecretMessage};
use serde::{Deserialize, Serialize};

/// Partial grievance update sent when a grievance is forgiven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrievancePatch {
    pub is_forgiven: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub action: String,
}

/// One remote call mirroring a committed local change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReplicationIntent {
    CreateGrievance {
        grievance: Grievance,
    },
    UpdateGrievance {
        id: String,
        patch: GrievancePatch,
    },
    AppendGrievanceAction {
        id: String,
        action: ActionPayload,
    },
    CreateSecretMessage {
        message: SecretMessage,
    },
    UpdateSecretMessage {
        id: String,
        patch: MessagePatch,
    },
}

impl ReplicationIntent {
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Id of the record this intent touches.
    pub fn record_id(&self) -> &str {
        match self {
            Self::CreateGrievance { grievance } => &grievance.id,
            Self::CreateSecretMessage { message } => &message.id,
            Self::UpdateGrievance { id, .. }
            | Self::AppendGrievanceAction { id, .. }
            | Self::UpdateSecretMessage { id, .. } => id,
        }
    }
}
