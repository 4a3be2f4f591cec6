//! Fetch-once memoization of the webhook URL.

use tokio::sync::OnceCell;

use super::{ResolutionError, SecretStore};

/// Resolves the webhook URL at most once per process.
///
/// The value is returned exactly as the store holds it; parsing happens at
/// delivery. The first successful fetch is kept for the lifetime of the
/// resolver and never refreshed. A failed fetch is not cached, so the next
/// call asks the store again.
///
/// # Example
///
/// ```ignore
/// let resolver = CachedResolver::new(store, "/secret/slack/webhook");
/// let url = resolver.resolve().await?;
/// ```
#[derive(Debug)]
pub struct CachedResolver<S> {
    store: S,
    name: String,
    url: OnceCell<String>,
}

impl<S> CachedResolver<S> {
    /// Creates a resolver for the secret or parameter called `name`.
    #[must_use]
    pub fn new(store: S, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
            url: OnceCell::new(),
        }
    }
}

impl<S: SecretStore> CachedResolver<S> {
    /// Returns the webhook URL, fetching it from the store on first use.
    ///
    /// # Errors
    ///
    /// Returns the store's [`ResolutionError`] unchanged.
    pub async fn resolve(&self) -> Result<&str, ResolutionError> {
        if let Some(url) = self.url.get() {
            tracing::debug!("Using cached webhook URL for '{}'", self.name);
            return Ok(url.as_str());
        }

        let url = self
            .url
            .get_or_try_init(|| async {
                tracing::debug!("Resolving webhook URL from '{}'", self.name);
                self.store.fetch(&self.name).await
            })
            .await?;

        tracing::info!("Resolved webhook URL from '{}'", self.name);
        Ok(url.as_str())
    }
}
