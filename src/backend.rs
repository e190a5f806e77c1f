//! Assistant backend abstraction
//!
//! The controller talks to the assistant through [`AssistantBackend`]; the
//! production implementation is [`HttpBackend`].

mod error;
mod http;

pub use error::{BackendError, GENERIC_REJECTION, GENERIC_TRANSPORT_FAILURE};
pub use http::HttpBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the assistant endpoint, joined onto a base URL
pub const ASSISTANT_PATH: &str = "/api/assistant/";

/// Join a base URL and the assistant path without doubling slashes
#[must_use]
pub fn assistant_url(base_url: &str) -> String {
    format!("{}{ASSISTANT_PATH}", base_url.trim_end_matches('/'))
}

/// Body sent to the assistant endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub text: String,
}

/// Body of a successful assistant reply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssistantReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub tool_results: Option<Vec<Value>>,
}

/// The `error` field of a failed reply, if the body is an object carrying one
#[must_use]
pub fn error_field(body: &Value) -> Option<String> {
    body.get("error").and_then(Value::as_str).map(str::to_string)
}

/// Common interface for assistant backends
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Send one request and wait for the reply
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, BackendError>;

    /// Human-readable target, used in logs
    fn endpoint(&self) -> &str;
}

/// Logging wrapper for assistant backends
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: AssistantBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: AssistantBackend> AssistantBackend for LoggingBackend<B> {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.ask(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    answer_len = reply.answer.as_ref().map_or(0, String::len),
                    tool_results = reply.tool_results.as_ref().map_or(0, Vec::len),
                    "Assistant request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    error = %e,
                    "Assistant request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
