use reqwest::StatusCode;
use thiserror::Error;

/// Failures while posting a message to the webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook endpoint is not configured")]
    MissingEndpoint,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// The payload could not be read as a change event.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}
