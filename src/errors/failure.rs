use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codes;

/// Result alias for operations that fail with an [`HttpFailure`]
pub type Result<T> = std::result::Result<T, HttpFailure>;

/// An HTTP status code paired with a human-readable message.
///
/// The status is not validated: any integer is stored as given and it is up
/// to whoever turns the failure into a response to decide what to do with
/// values that are not real HTTP status codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("{status} {message}")]
pub struct HttpFailure {
    status: i32,
    message: String,
}

impl HttpFailure {
    pub fn new(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Status supplied at construction
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Message supplied at construction
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 4xx status
    pub fn is_client_error(&self) -> bool {
        codes::is_client_error(self.status)
    }

    /// 5xx status
    pub fn is_server_error(&self) -> bool {
        codes::is_server_error(self.status)
    }
}

/// Helpers for common statuses
impl HttpFailure {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(429, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(502, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(503, message)
    }
}

/// Unclassified errors become a 500 carrying the full context chain.
impl From<anyhow::Error> for HttpFailure {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::collections::HashSet;

    #[test]
    fn test_accessors_return_constructed_values() {
        for (status, message) in [
            (404, "Not Found"),
            (500, "Internal Server Error"),
            (0, ""),
            (-1, "negative"),
            (i32::MAX, "max"),
            (i32::MIN, "min"),
        ] {
            let failure = HttpFailure::new(status, message);
            assert_eq!(failure.status(), status);
            assert_eq!(failure.message(), message);
        }
    }

    #[test]
    fn test_no_validation_on_degenerate_input() {
        let failure = HttpFailure::new(-1, "");
        assert_eq!(failure.status(), -1);
        assert_eq!(failure.message(), "");
        assert!(!failure.is_client_error());
        assert!(!failure.is_server_error());
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let message = "  línea 1\nline 2\t✓  ";
        let failure = HttpFailure::new(418, message.to_string());
        assert_eq!(failure.message(), message);
    }

    #[test]
    fn test_same_inputs_are_indistinguishable() {
        let a = HttpFailure::new(404, "Not Found");
        let b = HttpFailure::new(404, String::from("Not Found"));
        assert_eq!(a, b);
        assert_eq!(a.status(), b.status());
        assert_eq!(a.message(), b.message());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));

        assert_ne!(b, HttpFailure::new(404, "Gone"));
        assert_ne!(b, HttpFailure::new(410, "Not Found"));
    }

    #[test]
    fn test_display() {
        assert_eq!(HttpFailure::not_found("Not Found").to_string(), "404 Not Found");
        assert_eq!(HttpFailure::new(0, "").to_string(), "0 ");
    }

    #[test]
    fn test_helper_statuses() {
        assert_eq!(HttpFailure::bad_request("x").status(), 400);
        assert_eq!(HttpFailure::unauthorized("x").status(), 401);
        assert_eq!(HttpFailure::forbidden("x").status(), 403);
        assert_eq!(HttpFailure::not_found("x").status(), 404);
        assert_eq!(HttpFailure::conflict("x").status(), 409);
        assert_eq!(HttpFailure::too_many_requests("x").status(), 429);
        assert_eq!(HttpFailure::internal("x").status(), 500);
        assert_eq!(HttpFailure::bad_gateway("x").status(), 502);
        assert_eq!(HttpFailure::service_unavailable("x").status(), 503);
    }

    #[test]
    fn test_classification() {
        assert!(HttpFailure::new(400, "").is_client_error());
        assert!(HttpFailure::new(499, "").is_client_error());
        assert!(!HttpFailure::new(500, "").is_client_error());
        assert!(HttpFailure::new(500, "").is_server_error());
        assert!(HttpFailure::new(599, "").is_server_error());
        assert!(!HttpFailure::new(600, "").is_server_error());
        assert!(!HttpFailure::new(399, "").is_client_error());
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err = "ten"
            .parse::<u32>()
            .context("limit must be a number")
            .unwrap_err();
        let failure = HttpFailure::from(err);
        assert_eq!(failure.status(), 500);
        assert!(failure.message().starts_with("limit must be a number: "));
        assert!(failure.message().contains("invalid digit"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn lookup(id: &str) -> Result<u32> {
            if id.is_empty() {
                return Err(HttpFailure::bad_request("id must not be empty"));
            }
            Err(HttpFailure::not_found(format!("Card not found: {}", id)))
        }

        fn handler(id: &str) -> Result<u32> {
            let value = lookup(id)?;
            Ok(value + 1)
        }

        assert_eq!(handler("").unwrap_err().status(), 400);
        let err = handler("abc123").unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Card not found: abc123");
    }

    #[test]
    fn test_serde_shape() {
        let failure = HttpFailure::new(503, "Database connection failed");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": 503, "message": "Database connection failed"})
        );
        let back: HttpFailure = serde_json::from_value(json).unwrap();
        assert_eq!(back, failure);
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<HttpFailure>();
    }
}
