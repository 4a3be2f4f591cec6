//! Secret store trait and backend selection.

use std::fmt;

use super::ResolutionError;

/// Which AWS service holds the webhook URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretSource {
    /// AWS Secrets Manager; the secret string is a JSON object.
    #[default]
    SecretsManager,
    /// SSM Parameter Store; the (decrypted) parameter value is the URL.
    ParameterStore,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretsManager => write!(f, "secrets-manager"),
            Self::ParameterStore => write!(f, "parameter-store"),
        }
    }
}

/// Trait for reading a named value from a key-value secret store.
///
/// # Example
///
/// ```ignore
/// use dlq_notifier::secret::{ResolutionError, SecretStore};
///
/// struct Fixed(&'static str);
///
/// impl SecretStore for Fixed {
///     async fn fetch(&self, _name: &str) -> Result<String, ResolutionError> {
///         Ok(self.0.to_string())
///     }
/// }
/// ```
pub trait SecretStore: Send + Sync {
    /// Fetches the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] if the store cannot be read or the value
    /// is absent or malformed. Store errors are never retried.
    fn fetch(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<String, ResolutionError>> + Send;
}
