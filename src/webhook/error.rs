//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong on the wire. Non-success status codes are
/// not transport errors; see [`DeliveryError::Status`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The webhook URL is not a valid absolute URL.
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_builder() {
            Self::InvalidUrl(error.to_string())
        } else {
            Self::Connection(Box::new(error))
        }
    }
}

/// Error type for delivering one message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The webhook answered with status 400 or above.
    #[error("Error: Request returned status code: {status} with a response of: {body}")]
    Status {
        /// Numeric status code returned by the webhook
        status: u16,
        /// Response body, verbatim (lossy UTF-8)
        body: String,
    },

    /// The request never produced a response.
    #[error("Webhook request failed: {0}")]
    Http(#[from] HttpError),

    /// The payload could not be serialized.
    #[error("Failed to serialize webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeliveryError {
    /// Returns the HTTP status code, if the webhook responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) | Self::Serialize(_) => None,
        }
    }
}
