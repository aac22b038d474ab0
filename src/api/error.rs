//! Translation of service failures into HTTP responses.

use super::ApiResponse;
use crate::inspection::services::InspectionTaskServiceError;
use crate::notification::services::NotificationError;
use crate::property::ports::AddressRegistryError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure returned by an API handler.
///
/// Rendered as `{"success": false, "error": "..."}` with the matching status
/// code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Caller sent invalid input.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// The addressed resource does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// A backing store or transport failed.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "request rejected");
        }
        (self.status, ApiResponse::<()>::failure(self.message)).into_response()
    }
}

impl From<InspectionTaskServiceError> for ApiError {
    fn from(err: InspectionTaskServiceError) -> Self {
        match err {
            InspectionTaskServiceError::NotFound(_) => Self::not_found(err.to_string()),
            ref validation if validation.is_validation() => Self::bad_request(err.to_string()),
            other => Self::internal(format!("store unavailable: {other}")),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::MissingRecipient(_) => Self::bad_request(err.to_string()),
            NotificationError::Template(_) | NotificationError::DeliveryFailure(_) => {
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<AddressRegistryError> for ApiError {
    fn from(err: AddressRegistryError) -> Self {
        Self::internal(format!("store unavailable: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("invalid query string: {}", rejection.body_text()))
    }
}
