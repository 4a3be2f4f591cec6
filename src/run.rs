//! Application execution logic.
//!
//! This module wires the validated configuration into a [`Forwarder`] and
//! drives it either from the Lambda runtime API or from a local event file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lambda_runtime::{LambdaEvent, service_fn};
use thiserror::Error;

use dlq_notifier::config::ValidatedConfig;
use dlq_notifier::event::{SqsBatchResponse, SqsEvent};
use dlq_notifier::forwarder::{ForwardError, Forwarder};
use dlq_notifier::secret::{AwsSecretStore, CachedResolver};
use dlq_notifier::webhook::{ReqwestClient, SlackWebhook};

/// Type alias for the production forwarder.
type AppForwarder = Forwarder<AwsSecretStore, ReqwestClient>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The Lambda runtime loop failed.
    #[error("Lambda runtime error: {0}")]
    Runtime(#[source] lambda_runtime::Error),

    /// Failed to read the local event file.
    #[error("Failed to read event file '{}': {source}", path.display())]
    EventRead {
        /// Path to the event file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The local event file is not an SQS event.
    #[error("Failed to parse event file '{}': {source}", path.display())]
    EventParse {
        /// Path to the event file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Processing the batch failed.
    #[error(transparent)]
    Forward(#[from] ForwardError),
}

/// Builds the production forwarder from configuration.
///
/// The secret store client and the HTTP client are created once here and
/// live as long as the process.
async fn build_forwarder(config: &ValidatedConfig) -> AppForwarder {
    let store =
        AwsSecretStore::connect(config.secret_source, &config.region, &config.secret_key).await;

    let webhook = SlackWebhook::new(ReqwestClient::new()).with_dry_run(config.dry_run);

    Forwarder::new(
        config.message_format,
        CachedResolver::new(store, config.webhook_secret_name.clone()),
        webhook,
    )
    .with_failure_policy(config.failure_policy)
}

/// Serves invocations from the Lambda runtime API until the process ends.
///
/// # Errors
///
/// Returns [`RunError::Runtime`] if the runtime loop fails.
///
/// Excluded from coverage - requires the Lambda runtime API.
#[cfg(not(tarpaulin_include))]
pub async fn serve(config: ValidatedConfig) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - messages will be logged but not sent");
    }

    let forwarder = Arc::new(build_forwarder(&config).await);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let forwarder = Arc::clone(&forwarder);
        async move { handle_event(&forwarder, event).await }
    }))
    .await
    .map_err(RunError::Runtime)
}

/// Handles one Lambda invocation.
async fn handle_event(
    forwarder: &AppForwarder,
    event: LambdaEvent<SqsEvent>,
) -> Result<SqsBatchResponse, lambda_runtime::Error> {
    let (batch, context) = event.into_parts();

    tracing::info!(
        "Invocation {}: {} record(s)",
        context.request_id,
        batch.records.len()
    );

    Ok(forwarder.handle(&batch).await?)
}

/// Processes the event stored in `path` once and prints the batch response.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the batch
/// fails under the configured failure policy.
///
/// Excluded from coverage - requires AWS credentials.
#[cfg(not(tarpaulin_include))]
pub async fn invoke(config: ValidatedConfig, path: &Path) -> Result<(), RunError> {
    let batch = load_event(path)?;
    let forwarder = build_forwarder(&config).await;

    let response = forwarder.handle(&batch).await?;

    println!("{}", render_response(&response));
    Ok(())
}

/// Reads an SQS event from a JSON file.
fn load_event(path: &Path) -> Result<SqsEvent, RunError> {
    let content = std::fs::read_to_string(path).map_err(|source| RunError::EventRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RunError::EventParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders a batch response as the JSON Lambda would return.
fn render_response(response: &SqsBatchResponse) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| format!("{response:?}"))
}
