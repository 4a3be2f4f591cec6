//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Each option falls back to an environment variable so the same binary
//! can be configured by a Lambda function definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::forwarder::FailurePolicy;
use crate::message::MessageFormat;
use crate::secret::SecretSource;

/// DLQ notifier: forwards dead-letter and alarm events to Slack
///
/// Runs as an AWS Lambda function behind an SQS trigger. Without a
/// subcommand it serves the Lambda runtime API.
#[derive(Debug, Parser)]
#[command(name = "dlq-notifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Secret id or parameter name holding the webhook URL
    #[arg(long = "webhook-secret-name", env = "WEBHOOK_SECRET_NAME", global = true)]
    pub webhook_secret_name: Option<String>,

    /// Store holding the webhook URL
    #[arg(
        long = "secret-source",
        env = "WEBHOOK_SECRET_SOURCE",
        value_enum,
        global = true
    )]
    pub secret_source: Option<SecretSourceArg>,

    /// JSON key of the URL inside a Secrets Manager secret
    #[arg(long = "secret-key", env = "WEBHOOK_SECRET_KEY", global = true)]
    pub secret_key: Option<String>,

    /// AWS region of the secret store
    #[arg(long, env = "WEBHOOK_STORE_REGION", global = true)]
    pub region: Option<String>,

    /// Payload shape carried by queue records
    #[arg(
        long = "message-format",
        env = "MESSAGE_FORMAT",
        value_enum,
        global = true
    )]
    pub message_format: Option<MessageFormatArg>,

    /// What to do when a record fails
    #[arg(
        long = "failure-policy",
        env = "FAILURE_POLICY",
        value_enum,
        global = true
    )]
    pub failure_policy: Option<FailurePolicyArg>,

    /// Test mode - log messages without posting them
    #[arg(long = "dry-run", env = "DRY_RUN", global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, env = "VERBOSE", global = true)]
    pub verbose: bool,
}

/// Subcommands for dlq-notifier
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process one SQS event from a JSON file and exit
    Invoke {
        /// Path to the event JSON (same shape Lambda delivers)
        #[arg(long, short)]
        event: PathBuf,
    },
}

/// Secret store argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SecretSourceArg {
    /// AWS Secrets Manager (JSON secret)
    #[value(name = "secrets-manager")]
    SecretsManager,
    /// SSM Parameter Store (decrypted parameter)
    #[value(name = "parameter-store")]
    ParameterStore,
}

impl From<SecretSourceArg> for SecretSource {
    fn from(arg: SecretSourceArg) -> Self {
        match arg {
            SecretSourceArg::SecretsManager => Self::SecretsManager,
            SecretSourceArg::ParameterStore => Self::ParameterStore,
        }
    }
}

/// Message format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormatArg {
    /// Dead-letter messages with an entity `ref`
    #[value(name = "entity-ref")]
    EntityRef,
    /// CloudWatch alarm state changes
    #[value(name = "alarm")]
    Alarm,
}

impl From<MessageFormatArg> for MessageFormat {
    fn from(arg: MessageFormatArg) -> Self {
        match arg {
            MessageFormatArg::EntityRef => Self::EntityRef,
            MessageFormatArg::Alarm => Self::Alarm,
        }
    }
}

/// Failure policy argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    /// Fail the whole invocation on the first failing record
    #[value(name = "abort-batch")]
    AbortBatch,
    /// Keep going and report failed records to SQS
    #[value(name = "report-item-failures")]
    ReportItemFailures,
}

impl From<FailurePolicyArg> for FailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::AbortBatch => Self::AbortBatch,
            FailurePolicyArg::ReportItemFailures => Self::ReportItemFailures,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line and environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
