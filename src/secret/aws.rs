//! AWS-backed secret stores.

use aws_config::{BehaviorVersion, Region};

use super::{ResolutionError, SecretSource, SecretStore};

/// SSM Parameter Store backend.
///
/// Reads the parameter with decryption, so `SecureString` values work.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    client: aws_sdk_ssm::Client,
}

impl ParameterStore {
    /// Creates a backend from an SSM client.
    #[must_use]
    pub const fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

impl SecretStore for ParameterStore {
    async fn fetch(&self, name: &str) -> Result<String, ResolutionError> {
        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| ResolutionError::store(name, e))?;

        resp.parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| ResolutionError::MissingValue {
                name: name.to_string(),
            })
    }
}

/// Secrets Manager backend.
///
/// The secret string must be a JSON object; the webhook URL is read from
/// the configured key.
#[derive(Debug, Clone)]
pub struct SecretsManager {
    client: aws_sdk_secretsmanager::Client,
    key: String,
}

impl SecretsManager {
    /// Creates a backend reading `key` from the secret's JSON document.
    #[must_use]
    pub fn new(client: aws_sdk_secretsmanager::Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }
}

impl SecretStore for SecretsManager {
    async fn fetch(&self, name: &str) -> Result<String, ResolutionError> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| ResolutionError::store(name, e))?;

        let secret_string = resp
            .secret_string()
            .ok_or_else(|| ResolutionError::MissingValue {
                name: name.to_string(),
            })?;

        extract_secret_field(name, secret_string, &self.key)
    }
}

/// Reads a string field from a JSON secret document.
///
/// # Errors
///
/// Returns [`ResolutionError::MalformedSecret`] if the document is not JSON
/// or the field is missing or not a string.
pub fn extract_secret_field(
    name: &str,
    secret_string: &str,
    key: &str,
) -> Result<String, ResolutionError> {
    let malformed = |reason: String| ResolutionError::MalformedSecret {
        name: name.to_string(),
        reason,
    };

    let document: serde_json::Value = serde_json::from_str(secret_string)
        .map_err(|e| malformed(format!("not a JSON document ({e})")))?;

    document
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| malformed(format!("missing string field '{key}'")))
}

/// Secret store chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum AwsSecretStore {
    /// SSM Parameter Store.
    Parameter(ParameterStore),
    /// Secrets Manager.
    Secret(SecretsManager),
}

impl AwsSecretStore {
    /// Loads AWS configuration for `region` and builds the selected backend.
    ///
    /// `key` is only used by Secrets Manager.
    pub async fn connect(source: SecretSource, region: &str, key: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        match source {
            SecretSource::ParameterStore => {
                Self::Parameter(ParameterStore::new(aws_sdk_ssm::Client::new(&config)))
            }
            SecretSource::SecretsManager => Self::Secret(SecretsManager::new(
                aws_sdk_secretsmanager::Client::new(&config),
                key,
            )),
        }
    }
}

impl SecretStore for AwsSecretStore {
    async fn fetch(&self, name: &str) -> Result<String, ResolutionError> {
        match self {
            Self::Parameter(store) => store.fetch(name).await,
            Self::Secret(store) => store.fetch(name).await,
        }
    }
}
