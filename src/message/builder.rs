//! Payload parsing and message formatting.

use std::fmt;

use serde::Deserialize;

use crate::event::SqsMessage;

use super::ParseError;

/// Marker prepended to alarm messages whose state is `OK`.
pub const OK_MARKER: &str = ":white_check_mark:";

/// Marker prepended to alarm messages in any other state.
pub const ALARM_MARKER: &str = ":rotating_light:";

/// Body of a dead-letter message that references an entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityRefPayload {
    /// Entity reference.
    #[serde(rename = "ref")]
    pub entity_ref: String,
}

/// Body of a CloudWatch alarm state-change notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmPayload {
    /// Alarm name.
    pub alarm_name: String,
    /// State the alarm transitioned into (`OK`, `ALARM`, `INSUFFICIENT_DATA`).
    pub new_state_value: String,
}

impl AlarmPayload {
    /// Returns the marker for the alarm's new state.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        if self.new_state_value == "OK" {
            OK_MARKER
        } else {
            ALARM_MARKER
        }
    }
}

/// Text of a Slack message, sent as the `text` field of the webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackMessage(String);

impl SlackMessage {
    /// Wraps the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlackMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which payload shape a deployment consumes.
///
/// The shape is fixed per deployment and never inferred from the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageFormat {
    /// Dead-letter messages carrying `{"ref": ...}`.
    #[default]
    EntityRef,
    /// CloudWatch alarm notifications carrying `AlarmName` and `NewStateValue`.
    Alarm,
}

impl MessageFormat {
    /// Builds the message for a record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingBody`] if the record has no body, or
    /// [`ParseError::Payload`] if the body is malformed or a required key is absent.
    pub fn build(self, record: &SqsMessage) -> Result<SlackMessage, ParseError> {
        let body = record.body.as_deref().ok_or(ParseError::MissingBody)?;
        self.build_from_body(body)
    }

    /// Builds the message from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Payload`] if the body does not match this format.
    pub fn build_from_body(self, body: &str) -> Result<SlackMessage, ParseError> {
        let text = match self {
            Self::EntityRef => {
                let payload: EntityRefPayload = serde_json::from_str(body)?;
                format!(
                    "A SQS message containing the entity ref: _*{}*_ was sent to the _*DLQ*_",
                    payload.entity_ref
                )
            }
            Self::Alarm => {
                let payload: AlarmPayload = serde_json::from_str(body)?;
                format!(
                    "{} Cloudwatch alarm **{}** has entered state **{}**",
                    payload.marker(),
                    payload.alarm_name,
                    payload.new_state_value
                )
            }
        };
        Ok(SlackMessage(text))
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityRef => write!(f, "entity-ref"),
            Self::Alarm => write!(f, "alarm"),
        }
    }
}
