/// API error handling
///
/// Maps service failures onto HTTP responses. Error bodies use the
/// `{statusCode, statusMessage}` shape the frontend expects. Internal
/// failure detail is logged server-side and never returned to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Errors returned from request handlers
///
/// Implements `IntoResponse`, so handlers can return
/// `Result<_, ApiError>` and axum does the conversion.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced habit does not exist (404)
    #[error("Habit not found")]
    NotFound,

    /// Underlying storage failure (500); the context string is what the
    /// client sees, the source is what gets logged
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Map a service failure onto an HTTP error
    ///
    /// `context` is the endpoint-specific message used when the failure is
    /// an internal one (e.g. "Failed to create habit").
    pub fn from_service(err: ServiceError, context: &'static str) -> Self {
        match err {
            ServiceError::Validation(message) => ApiError::Validation(message),
            ServiceError::NotFound(_) => ApiError::NotFound,
            storage_failure => ApiError::Internal {
                context,
                source: storage_failure,
            },
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub status_message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Habit not found".to_string()),
            ApiError::Internal { context, source } => {
                tracing::error!("{}: {}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            status_message: message,
        };

        (status, Json(body)).into_response()
    }
}
