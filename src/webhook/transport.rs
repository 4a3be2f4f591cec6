//! Transport seam for posting JSON to a webhook.

use std::future::Future;

use http::StatusCode;
use url::Url;

use super::HttpError;

/// Content type sent with every webhook payload.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON document to POST to a webhook URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPost {
    /// Destination URL.
    pub url: Url,
    /// Serialized JSON body.
    pub body: Vec<u8>,
}

/// The webhook's answer to a [`JsonPost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// Status code returned by the webhook.
    pub status: StatusCode,
    /// Response body decoded as lossy UTF-8.
    pub body: String,
}

impl WebhookResponse {
    /// Creates a response from a status and body text.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for any status below 400.
    ///
    /// Redirect codes count as accepted since the client never follows them
    /// to a failure.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status.as_u16() < 400
    }
}

/// Sends JSON posts to webhooks.
///
/// Implementations must be `Send + Sync` so one client can be shared by
/// every invocation of a warm Lambda process.
pub trait HttpClient: Send + Sync {
    /// POSTs `post.body` to `post.url` with a JSON content type.
    ///
    /// Any status code is a successful transport result; only failures to
    /// obtain a response are errors.
    fn post_json(
        &self,
        post: JsonPost,
    ) -> impl Future<Output = Result<WebhookResponse, HttpError>> + Send;
}
