//! Error types for message construction.

use thiserror::Error;

/// Error type for turning a record into a message.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The record carried no body at all.
    #[error("Record has no body")]
    MissingBody,

    /// The body is not valid JSON or lacks a required field.
    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),
}
