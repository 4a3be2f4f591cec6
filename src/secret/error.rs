//! Error types for webhook URL resolution.

use aws_sdk_ssm::error::DisplayErrorContext;
use thiserror::Error;

/// Error type for resolving the webhook URL.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The store rejected or failed the lookup.
    ///
    /// `source` is the store's own error, unchanged.
    #[error("Failed to read '{name}' from the secret store: {}", DisplayErrorContext(&**source))]
    Store {
        /// Secret id or parameter name
        name: String,
        /// Error returned by the store client
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The secret or parameter exists but has no value.
    #[error("Secret '{name}' has no value")]
    MissingValue {
        /// Secret id or parameter name
        name: String,
    },

    /// The secret string is not the expected JSON document.
    #[error("Secret '{name}' is malformed: {reason}")]
    MalformedSecret {
        /// Secret id
        name: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ResolutionError {
    /// Wraps a store client error for the given name.
    pub fn store(
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
