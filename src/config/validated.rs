//! Validated configuration built from CLI arguments and the environment.
//!
//! This module contains the final, validated configuration used by the
//! binary. All validation is performed during construction.

use std::fmt;

use crate::forwarder::FailurePolicy;
use crate::message::MessageFormat;
use crate::secret::SecretSource;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_cli`] to create from parsed CLI arguments
/// (which already include environment fallbacks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Secret id or parameter name holding the webhook URL (required)
    pub webhook_secret_name: String,

    /// Store holding the webhook URL
    pub secret_source: SecretSource,

    /// JSON key of the URL inside a Secrets Manager secret
    pub secret_key: String,

    /// AWS region of the secret store
    pub region: String,

    /// Payload shape carried by queue records
    pub message_format: MessageFormat,

    /// Handling of failing records
    pub failure_policy: FailurePolicy,

    /// Dry-run mode (log messages without posting them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook_secret_name: {}, secret_source: {}, secret_key: {}, region: {}, \
             message_format: {}, failure_policy: {}, dry_run: {} }}",
            self.webhook_secret_name,
            self.secret_source,
            self.secret_key,
            self.region,
            self.message_format,
            self.failure_policy,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook secret name is missing or blank
    /// - The secret key is blank while reading from Secrets Manager
    /// - The region is blank
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let webhook_secret_name = Self::resolve_secret_name(cli)?;

        let secret_source: SecretSource = cli.secret_source.map(Into::into).unwrap_or_default();

        let secret_key = Self::resolve_secret_key(cli, secret_source)?;

        let region = Self::resolve_region(cli)?;

        Ok(Self {
            webhook_secret_name,
            secret_source,
            secret_key,
            region,
            message_format: cli.message_format.map(Into::into).unwrap_or_default(),
            failure_policy: cli.failure_policy.map(Into::into).unwrap_or_default(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    fn resolve_secret_name(cli: &Cli) -> Result<String, ConfigError> {
        cli.webhook_secret_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_SECRET_NAME,
                    "Use --webhook-secret-name or set WEBHOOK_SECRET_NAME",
                )
            })
    }

    fn resolve_secret_key(cli: &Cli, source: SecretSource) -> Result<String, ConfigError> {
        let key = cli.secret_key.as_deref().unwrap_or(defaults::SECRET_KEY).trim();

        if key.is_empty() && source == SecretSource::SecretsManager {
            return Err(ConfigError::invalid(
                field::SECRET_KEY,
                "must not be empty when reading from Secrets Manager",
            ));
        }

        Ok(key.to_string())
    }

    fn resolve_region(cli: &Cli) -> Result<String, ConfigError> {
        let region = cli.region.as_deref().unwrap_or(defaults::REGION).trim();

        if region.is_empty() {
            return Err(ConfigError::invalid(field::REGION, "must not be empty"));
        }

        Ok(region.to_string())
    }
}
