use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::ContactSubmission;

/// Header carrying the shared webhook secret.
pub const AUTH_HEADER: &str = "X-Contact-Key";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("request exceeded the {0:?} deadline")]
    Timeout(Duration),
    #[error("webhook returned HTTP {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("webhook response body was not valid JSON: {0}")]
    Malformed(#[source] reqwest::Error),
    #[error("webhook rejected the submission: {0}")]
    Rejected(String),
}

/// Parsed webhook reply. The schema is owned by the remote endpoint;
/// a body without a `success` flag counts as malformed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebhookResponse {
    pub success: bool,
    pub message: Option<String>,
}

pub struct WebhookClient {
    client: Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(url: String, api_key: String, timeout: Duration) -> Self {
        let client = reqwest::Client::new();

        WebhookClient {
            client,
            url,
            api_key,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST the submission as JSON. Exactly one request per call; the
    /// whole exchange is bounded by the configured deadline and the
    /// in-flight request is dropped when it expires.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<WebhookResponse, SubmitError> {
        log::info!("Posting contact submission to {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .header(AUTH_HEADER, self.api_key.clone())
            .json(submission)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| match e.is_timeout() {
                true => SubmitError::Timeout(self.timeout),
                false => SubmitError::Network(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Http(status.as_u16()));
        }

        response
            .json::<WebhookResponse>()
            .await
            .map_err(|e| match e.is_timeout() {
                true => SubmitError::Timeout(self.timeout),
                false => SubmitError::Malformed(e),
            })
    }
}
