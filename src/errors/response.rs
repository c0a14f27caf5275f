use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use super::codes;
use super::failure::HttpFailure;
use crate::config::RenderConfig;

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Status carried by the failure, even when it is not a valid HTTP status
    pub status: i32,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing
    pub request_id: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: i32, message: impl Into<String>) -> Self {
        Self::with_request_id(status, message, Uuid::new_v4().to_string())
    }

    /// Create error with custom request ID
    pub fn with_request_id(
        status: i32,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                status,
                message: message.into(),
                request_id: request_id.into(),
            },
        }
    }
}

impl From<&HttpFailure> for ErrorResponse {
    fn from(failure: &HttpFailure) -> Self {
        Self::new(failure.status(), failure.message())
    }
}

/// Turns failures into JSON responses according to a [`RenderConfig`]
#[derive(Debug, Clone, Default)]
pub struct ErrorRenderer {
    config: RenderConfig,
}

impl ErrorRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Response status for a failure, substituting the fallback for values
    /// that are not HTTP status codes.
    pub fn response_status(&self, failure: &HttpFailure) -> StatusCode {
        codes::to_status_code(failure.status()).unwrap_or(self.config.fallback_status)
    }

    /// Build the response body. Redaction follows the response status, so an
    /// out-of-range status that falls back to a 5xx is redacted too.
    pub fn body(&self, failure: &HttpFailure) -> ErrorResponse {
        let mut body = ErrorResponse::from(failure);
        if self.response_status(failure).is_server_error() && !self.config.expose_server_messages
        {
            body.error.message = self.config.redacted_message.clone();
        }
        body
    }

    pub fn render(&self, failure: &HttpFailure) -> Response {
        let status = self.response_status(failure);
        let body = self.body(failure);
        let request_id = &body.error.request_id;

        if codes::to_status_code(failure.status()).is_none() {
            error!(
                request_id = %request_id,
                status = failure.status(),
                fallback = status.as_u16(),
                message = %failure.message(),
                "Failure status is not an HTTP status code"
            );
        } else if status.is_client_error() {
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                message = %failure.message(),
                "Request failed (client error)"
            );
        } else if status.is_server_error() {
            error!(
                request_id = %request_id,
                status = status.as_u16(),
                message = %failure.message(),
                "Request failed (server error)"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for HttpFailure {
    fn into_response(self) -> Response {
        ErrorRenderer::default().render(&self)
    }
}
