use super::events::ReasonCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LocationError {
    /// Malformed input, rejected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// Network failure, timeout or an unreadable response body.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Reserved: multiple matches currently resolve to the first one.
    #[error("Ambiguous match: {0}")]
    Ambiguous(String),
}

impl LocationError {
    /// Reason code surfaced to the form, if this error can reach it.
    pub fn reason_code(&self) -> Option<ReasonCode> {
        match self {
            Self::Validation(_) => None,
            Self::NotFound(_) => Some(ReasonCode::NotFound),
            Self::Transport(_) => Some(ReasonCode::TransportError),
            Self::Ambiguous(_) => Some(ReasonCode::Ambiguous),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReverseGeocodeError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("Reverse geocoding failed: {0}")]
    Transport(String),
    #[error("No pincode found for this location")]
    MissingPincode,
}

impl From<LocationError> for ReverseGeocodeError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Validation(msg) => Self::InvalidCoordinates(msg),
            LocationError::NotFound(_) => Self::MissingPincode,
            LocationError::Transport(msg) | LocationError::Ambiguous(msg) => Self::Transport(msg),
        }
    }
}
