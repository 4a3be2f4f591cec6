//! reqwest-backed webhook transport.

use http::header::CONTENT_TYPE;

use super::{HttpClient, HttpError, JSON_CONTENT_TYPE, JsonPost, WebhookResponse};

/// Webhook transport built on one long-lived `reqwest::Client`.
///
/// The connection pool survives across invocations served by the same
/// Lambda process. No timeout is configured; the invocation deadline bounds
/// each request.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    async fn post_json(&self, post: JsonPost) -> Result<WebhookResponse, HttpError> {
        let response = self
            .inner
            .post(post.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(post.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        Ok(WebhookResponse::new(status, String::from_utf8_lossy(&body)))
    }
}
