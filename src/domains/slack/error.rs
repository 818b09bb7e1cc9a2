//! Slack-specific error types.

use thiserror::Error;

/// Errors that can occur while talking to the Slack Web API.
///
/// `Http` and `Json` mean the call itself failed and propagate as a rejected
/// tool call. `Api` means Slack answered `ok: false`; the tools render it as
/// text and the server keeps serving.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The HTTP request could not be completed (DNS, connect, TLS, read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode Slack response: {0}")]
    Json(#[from] serde_json::Error),

    /// Slack answered with `ok: false` and an error code.
    #[error("Slack API error: {code}")]
    Api { code: String },
}

impl SlackError {
    /// Create a new API-level error from a Slack error code.
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }
}
