//! Webhook URL resolution from AWS secret stores.
//!
//! This module provides:
//! - The store abstraction ([`SecretStore`])
//! - SSM Parameter Store and Secrets Manager backends ([`ParameterStore`], [`SecretsManager`])
//! - Runtime backend selection ([`AwsSecretStore`])
//! - Fetch-once memoization of the webhook URL ([`CachedResolver`])

mod aws;
mod cached;
mod error;
mod store;

#[cfg(test)]
mod aws_tests;

pub use aws::{AwsSecretStore, ParameterStore, SecretsManager, extract_secret_field};
pub use cached::CachedResolver;
pub use error::ResolutionError;
pub use store::{SecretSource, SecretStore};
