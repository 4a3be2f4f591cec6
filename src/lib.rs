//! DLQ notifier: SQS failure events to Slack.
//!
//! A library for turning dead-letter queue messages and CloudWatch alarm
//! notifications into Slack messages and posting them to an incoming
//! webhook, one record at a time.

pub mod config;
pub mod event;
pub mod forwarder;
pub mod message;
pub mod secret;
pub mod webhook;
