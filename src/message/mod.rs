//! Message construction from queue records.
//!
//! This module provides:
//! - Payload shapes carried in record bodies ([`EntityRefPayload`], [`AlarmPayload`])
//! - The per-deployment message format ([`MessageFormat`])
//! - The built message text ([`SlackMessage`])
//! - Parse failures ([`ParseError`])

mod builder;
mod error;


pub use builder::{
    ALARM_MARKER, AlarmPayload, EntityRefPayload, MessageFormat, OK_MARKER, SlackMessage,
};
pub use error::ParseError;
