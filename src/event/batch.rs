//! Helpers over the SQS event and partial-batch response types.

use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsMessage};

/// Placeholder used in logs and errors when SQS did not supply a message id.
pub const UNKNOWN_MESSAGE_ID: &str = "<unknown>";

/// Returns the message id, or [`UNKNOWN_MESSAGE_ID`] when it is absent.
#[must_use]
pub fn message_id_or_unknown(message: &SqsMessage) -> &str {
    message.message_id.as_deref().unwrap_or(UNKNOWN_MESSAGE_ID)
}

/// Marks the record with the given message id as failed.
pub fn push_failure(response: &mut SqsBatchResponse, item_identifier: impl Into<String>) {
    let mut failure = BatchItemFailure::default();
    failure.item_identifier = item_identifier.into();
    response.batch_item_failures.push(failure);
}

/// Builds a message carrying only an id and a body.
#[cfg(test)]
pub fn sqs_message(message_id: &str, body: &str) -> SqsMessage {
    let mut message = SqsMessage::default();
    message.message_id = Some(message_id.to_string());
    message.body = Some(body.to_string());
    message
}
