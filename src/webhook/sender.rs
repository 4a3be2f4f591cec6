//! Slack webhook sender.

use serde::Serialize;
use url::Url;

use crate::message::SlackMessage;

use super::{DeliveryError, HttpClient, HttpError, JsonPost, WebhookResponse};

/// Confirmation returned instead of a status line when dry-run is enabled.
pub const DRY_RUN_CONFIRMATION: &str = "Dry run: message not sent";

/// JSON envelope accepted by Slack incoming webhooks.
#[derive(Debug, Serialize)]
pub struct SlackPayload<'a> {
    /// Message text (Slack mrkdwn).
    pub text: &'a str,
}

/// Posts Slack messages to a webhook URL.
///
/// Each call makes exactly one attempt; there is no retry. The URL is
/// passed per call, as resolved, and only parsed here.
///
/// # Example
///
/// ```no_run
/// use dlq_notifier::message::SlackMessage;
/// use dlq_notifier::webhook::{ReqwestClient, SlackWebhook};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = SlackWebhook::new(ReqwestClient::new());
/// let confirmation = webhook
///     .deliver(
///         &SlackMessage::new("hello"),
///         "https://hooks.slack.com/services/T000/B000/XXXX",
///     )
///     .await?;
/// assert_eq!(confirmation, "Response was 200");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlackWebhook<H> {
    client: H,
    dry_run: bool,
}

impl<H> SlackWebhook<H> {
    /// Creates a sender that delivers through the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode (log the payload, skip the request).
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl<H: HttpClient> SlackWebhook<H> {
    /// Delivers a message and verifies the webhook's answer.
    ///
    /// Returns a confirmation such as `"Response was 200"`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Http`] if `webhook_url` does not parse or the
    /// request fails on the wire, or [`DeliveryError::Status`] if the webhook
    /// answers with 400 or above.
    pub async fn deliver(
        &self,
        message: &SlackMessage,
        webhook_url: &str,
    ) -> Result<String, DeliveryError> {
        let post = slack_post(message, webhook_url)?;

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would POST to {}: {}",
                post.url.host_str().unwrap_or("<no host>"),
                String::from_utf8_lossy(&post.body)
            );
            return Ok(DRY_RUN_CONFIRMATION.to_string());
        }

        let response = self.client.post_json(post).await?;
        verify_response(&response)
    }
}

/// Encodes `{"text": message}` for the given webhook.
fn slack_post(message: &SlackMessage, webhook_url: &str) -> Result<JsonPost, DeliveryError> {
    let url = Url::parse(webhook_url).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
    let body = serde_json::to_vec_pretty(&SlackPayload {
        text: message.as_str(),
    })?;

    Ok(JsonPost { url, body })
}

/// Checks a webhook response.
///
/// # Errors
///
/// Returns [`DeliveryError::Status`] carrying the status code and the body
/// verbatim when the status is 400 or above.
pub fn verify_response(response: &WebhookResponse) -> Result<String, DeliveryError> {
    if response.is_accepted() {
        Ok(format!("Response was {}", response.status.as_u16()))
    } else {
        Err(DeliveryError::Status {
            status: response.status.as_u16(),
            body: response.body.clone(),
        })
    }
}
