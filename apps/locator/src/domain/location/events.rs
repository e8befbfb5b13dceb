use super::entity::VerificationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ReasonCode {
    NotFound,
    TransportError,
    Ambiguous,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::TransportError => "TRANSPORT_ERROR",
            Self::Ambiguous => "AMBIGUOUS",
        }
    }
}

/// User-facing status line shown under the pincode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LocationNote {
    Prompt,
    Verified,
    DetectedAndVerified,
    PickFromList,
}

impl LocationNote {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Prompt => "Select State/District or enter your pincode",
            Self::Verified => "Location verified",
            Self::DetectedAndVerified => "Location detected and verified",
            Self::PickFromList => "Could not verify pincode. Please recheck or select from list.",
        }
    }
}

/// Published every time a session's verification status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VerificationChanged {
    pub session_id: Uuid,
    pub verified: bool,
    pub status: VerificationStatus,
    pub pincode: String,
    pub reason: Option<ReasonCode>,
    pub note: LocationNote,
    pub at: DateTime<Utc>,
}
