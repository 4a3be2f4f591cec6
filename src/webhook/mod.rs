//! Delivery of Slack messages to an incoming webhook.
//!
//! This module provides:
//! - The transport seam ([`HttpClient`], [`JsonPost`], [`WebhookResponse`])
//! - The production transport ([`ReqwestClient`])
//! - Posting and verifying Slack payloads ([`SlackWebhook`], [`verify_response`])

mod client;
mod error;
mod sender;
mod transport;


pub use client::ReqwestClient;
pub use error::{DeliveryError, HttpError};
pub use sender::{DRY_RUN_CONFIRMATION, SlackPayload, SlackWebhook, verify_response};
pub use transport::{HttpClient, JSON_CONTENT_TYPE, JsonPost, WebhookResponse};
