use anyhow::{Context, Result};
use axum::http::StatusCode;
use std::env;

const DEFAULT_REDACTED_MESSAGE: &str = "Internal Server Error";

/// Controls how failures are written out as HTTP responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether 5xx messages reach the client as-is
    pub expose_server_messages: bool,
    /// Used when a failure's status is not a valid HTTP status code
    pub fallback_status: StatusCode,
    /// Replaces 5xx messages when they are not exposed
    pub redacted_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            expose_server_messages: true,
            fallback_status: StatusCode::INTERNAL_SERVER_ERROR,
            redacted_message: DEFAULT_REDACTED_MESSAGE.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback_code: u16 = lookup("HTTP_FAILURE_FALLBACK_STATUS")
            .unwrap_or_else(|| "500".to_string())
            .parse()
            .context("HTTP_FAILURE_FALLBACK_STATUS must be a valid number")?;

        Ok(RenderConfig {
            expose_server_messages: lookup("HTTP_FAILURE_EXPOSE_SERVER_MESSAGES")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("HTTP_FAILURE_EXPOSE_SERVER_MESSAGES must be true or false")?,
            fallback_status: StatusCode::from_u16(fallback_code)
                .context("HTTP_FAILURE_FALLBACK_STATUS must be an HTTP status code")?,
            redacted_message: lookup("HTTP_FAILURE_REDACTED_MESSAGE")
                .unwrap_or_else(|| DEFAULT_REDACTED_MESSAGE.to_string()),
        })
    }
}
