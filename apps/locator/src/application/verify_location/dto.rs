use crate::domain::location::events::ReasonCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which form a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormKind {
    Registration,
    Search,
}

/// A pincode that passed verification, with the location it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerifiedLocation {
    pub pincode: String,
    pub state: String,
    pub district: String,
}

/// How an asynchronous verification ended for its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified(VerifiedLocation),
    Rejected(ReasonCode),
    /// The pincode was edited away before the answer arrived, or a late
    /// failure hit an already verified selection.
    Discarded,
}
