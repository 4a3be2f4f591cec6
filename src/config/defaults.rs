//! Default values for configuration options.

/// JSON key holding the webhook URL inside a Secrets Manager secret.
pub const SECRET_KEY: &str = "slack_webhook_url";

/// Region of the secret/parameter store.
pub const REGION: &str = "eu-west-2";
