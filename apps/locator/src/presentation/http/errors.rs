//! HTTP error handling and response conversion.
//!
//! Handler errors map to a status code and a user-safe JSON body. The full
//! error is logged; only `user_message` leaves the process.

use crate::domain::location::errors::{LocationError, ReverseGeocodeError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed query or path parameter (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Upstream geo service failed or timed out (503).
    ExternalService(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ExternalService(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// User-safe message, without implementation details.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::ExternalService(_) => "Location service unavailable".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Validation(msg) => AppError::ValidationError(msg),
            LocationError::NotFound(msg) => AppError::NotFound(msg),
            LocationError::Transport(msg) => AppError::ExternalService(msg),
            LocationError::Ambiguous(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ReverseGeocodeError> for AppError {
    fn from(err: ReverseGeocodeError) -> Self {
        match err {
            ReverseGeocodeError::InvalidCoordinates(msg) => AppError::BadRequest(msg),
            ReverseGeocodeError::MissingPincode => AppError::NotFound(err.to_string()),
            ReverseGeocodeError::Transport(msg) => AppError::ExternalService(msg),
            ReverseGeocodeError::PermissionDenied | ReverseGeocodeError::PositionUnavailable(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
