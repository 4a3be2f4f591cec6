//! Lambda event model for SQS-triggered invocations.
//!
//! The SQS envelope and the partial-batch response come from
//! `aws_lambda_events`. This module adds the helpers the forwarder needs
//! on top of them.

mod batch;

#[cfg(test)]
mod batch_tests;

pub use aws_lambda_events::event::sqs::{
    BatchItemFailure, SqsBatchResponse, SqsEvent, SqsMessage,
};
pub use batch::{UNKNOWN_MESSAGE_ID, message_id_or_unknown, push_failure};

#[cfg(test)]
pub(crate) use batch::sqs_message;
