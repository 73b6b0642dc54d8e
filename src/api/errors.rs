use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::composer::ComposerError;
use crate::domain::draft::DraftError;
use crate::domain::providers::ProviderError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 502 Bad Gateway error
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        let message = err.to_string();
        match err {
            DraftError::UnknownPlayer(_) => Self::not_found(message),
            DraftError::NotSelected(_)
            | DraftError::TeamIncomplete { .. }
            | DraftError::DesignationsMissing => Self::bad_request(message),
            DraftError::AlreadySelected(_)
            | DraftError::SelectionFull
            | DraftError::AlreadyCaptain(_)
            | DraftError::AlreadyViceCaptain(_)
            | DraftError::SubmitInFlight
            | DraftError::AlreadySubmitted => Self::conflict(message),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        let message = err.to_string();
        match err {
            ProviderError::ContestNotFound(_) => Self::not_found(message),
            ProviderError::Unreachable(_) | ProviderError::InvalidResponse(_) => {
                Self::bad_gateway(message)
            }
            // Save-endpoint refusals carry the upstream message verbatim.
            ProviderError::Rejected { .. } => Self::bad_request(message),
        }
    }
}

impl From<ComposerError> for ApiError {
    fn from(err: ComposerError) -> Self {
        match err {
            ComposerError::Draft(e) => e.into(),
            ComposerError::Provider(e) => e.into(),
        }
    }
}
