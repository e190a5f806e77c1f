//! HTTP assistant backend

use super::{
    assistant_url, error_field, AssistantBackend, AssistantReply, AssistantRequest, BackendError,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Talks to `<base>/api/assistant/` over HTTP
///
/// No request timeout is configured: a hung backend keeps the turn pending.
pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: assistant_url(base_url),
        }
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, BackendError> {
        let response = self
            .client
            .post(&self.url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    BackendError::transport(format!("Connection failed: {e}"))
                } else {
                    BackendError::transport(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let reply: Value = serde_json::from_str(&body)
                .map_err(|e| BackendError::transport(format!("Failed to parse response: {e}")))?;
            return Err(BackendError::rejected(status.as_u16(), error_field(&reply)));
        }

        serde_json::from_str(&body)
            .map_err(|e| BackendError::transport(format!("Failed to parse response: {e}")))
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
