//! The batch handler.

use crate::event::{
    SqsBatchResponse, SqsEvent, SqsMessage, message_id_or_unknown, push_failure,
};
use crate::message::MessageFormat;
use crate::secret::{CachedResolver, SecretStore};
use crate::webhook::{HttpClient, SlackWebhook};

use super::{FailurePolicy, ForwardError};

/// Forwards each record of an SQS batch to the Slack webhook.
///
/// One `Forwarder` is built per process and reused by every invocation, so
/// the resolved webhook URL and the HTTP connection pool survive between
/// warm invocations.
///
/// Records are processed strictly in order, one at a time. For each record
/// the message is built first, then the URL is resolved (from cache after the
/// first success), then the message is delivered and the response verified.
///
/// # Type Parameters
///
/// - `S`: The secret store holding the webhook URL
/// - `H`: The HTTP client used for delivery
#[derive(Debug)]
pub struct Forwarder<S, H> {
    format: MessageFormat,
    resolver: CachedResolver<S>,
    webhook: SlackWebhook<H>,
    policy: FailurePolicy,
}

impl<S, H> Forwarder<S, H> {
    /// Creates a forwarder with the default [`FailurePolicy::AbortBatch`].
    #[must_use]
    pub const fn new(
        format: MessageFormat,
        resolver: CachedResolver<S>,
        webhook: SlackWebhook<H>,
    ) -> Self {
        Self {
            format,
            resolver,
            webhook,
            policy: FailurePolicy::AbortBatch,
        }
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<S: SecretStore, H: HttpClient> Forwarder<S, H> {
    /// Processes one batch.
    ///
    /// Under [`FailurePolicy::AbortBatch`] the first failure is returned and
    /// the remaining records are skipped; deliveries already made stay made.
    /// Under [`FailurePolicy::ReportItemFailures`] record-level failures are
    /// collected into the returned [`SqsBatchResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] when a failure aborts the batch.
    pub async fn handle(&self, batch: &SqsEvent) -> Result<SqsBatchResponse, ForwardError> {
        tracing::debug!("Processing batch of {} record(s)", batch.records.len());

        let mut response = SqsBatchResponse::default();

        for record in &batch.records {
            match self.process_record(record).await {
                Ok(confirmation) => {
                    tracing::info!("Record {}: {confirmation}", message_id_or_unknown(record));
                }
                Err(e) => self.handle_failure(record, e, &mut response)?,
            }
        }

        if !response.batch_item_failures.is_empty() {
            tracing::warn!(
                "{} of {} record(s) reported for redelivery",
                response.batch_item_failures.len(),
                batch.records.len()
            );
        }

        Ok(response)
    }

    /// Builds, resolves and delivers a single record.
    ///
    /// Returns the delivery confirmation (e.g. `"Response was 200"`).
    ///
    /// # Errors
    ///
    /// Returns the [`ForwardError`] of the first stage that failed.
    pub async fn process_record(&self, record: &SqsMessage) -> Result<String, ForwardError> {
        let message = self
            .format
            .build(record)
            .map_err(|source| ForwardError::Parse {
                message_id: message_id_or_unknown(record).to_string(),
                source,
            })?;

        let url = self.resolver.resolve().await?;

        self.webhook
            .deliver(&message, url)
            .await
            .map_err(|source| ForwardError::Delivery {
                message_id: message_id_or_unknown(record).to_string(),
                source,
            })
    }

    /// Applies the failure policy to a failed record.
    fn handle_failure(
        &self,
        record: &SqsMessage,
        error: ForwardError,
        response: &mut SqsBatchResponse,
    ) -> Result<(), ForwardError> {
        if self.policy == FailurePolicy::AbortBatch || !error.is_record_level() {
            tracing::error!("Aborting batch: {error}");
            return Err(error);
        }

        // Without a message id SQS cannot be told which item failed.
        let Some(message_id) = record.message_id.as_deref() else {
            tracing::error!("Aborting batch, failed record has no message id: {error}");
            return Err(error);
        };

        tracing::warn!("Reporting item failure: {error}");
        push_failure(response, message_id);
        Ok(())
    }
}
