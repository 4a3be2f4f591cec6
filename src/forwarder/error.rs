//! Error type for batch processing.

use thiserror::Error;

use crate::message::ParseError;
use crate::secret::ResolutionError;
use crate::webhook::DeliveryError;

/// Error raised while forwarding a record, tagged with the failing stage.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The record body could not be turned into a message.
    #[error("Failed to parse record {message_id}: {source}")]
    Parse {
        /// SQS message id of the record
        message_id: String,
        /// Underlying parse failure
        #[source]
        source: ParseError,
    },

    /// The webhook URL could not be resolved.
    #[error("Failed to resolve webhook URL: {0}")]
    Resolution(#[from] ResolutionError),

    /// The webhook rejected the message or could not be reached.
    #[error("Failed to deliver record {message_id}: {source}")]
    Delivery {
        /// SQS message id of the record
        message_id: String,
        /// Underlying delivery failure
        #[source]
        source: DeliveryError,
    },
}

impl ForwardError {
    /// Returns true if the failure is specific to one record.
    ///
    /// Resolution failures are not: every record in the batch would hit them.
    #[must_use]
    pub const fn is_record_level(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Delivery { .. })
    }
}
