//! Mock implementations for testing
//!
//! These mocks enable controller tests without real I/O.

use crate::backend::{AssistantBackend, AssistantReply, AssistantRequest, BackendError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Backend
// ============================================================================

#[derive(Default)]
struct MockInner {
    replies: VecDeque<Result<AssistantReply, BackendError>>,
    requests: Vec<AssistantRequest>,
}

/// Mock backend that returns queued replies
///
/// Clones share the same queue and request log.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockInner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: AssistantReply) {
        self.inner.lock().unwrap().replies.push_back(Ok(reply));
    }

    /// Queue a failed reply
    pub fn queue_error(&self, error: BackendError) {
        self.inner.lock().unwrap().replies.push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<AssistantRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl AssistantBackend for MockBackend {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::transport("No mock reply queued")))
    }

    fn endpoint(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let mock = MockBackend::new();
        mock.queue_reply(AssistantReply {
            answer: Some("Hello".to_string()),
            tool_results: None,
        });

        let request = AssistantRequest {
            text: "hi".to_string(),
        };

        let reply = mock.ask(&request).await.unwrap();
        assert_eq!(reply.answer.as_deref(), Some("Hello"));

        // Second call should fail (no more replies)
        let result = mock.ask(&request).await;
        assert!(result.is_err());
        assert_eq!(mock.recorded_requests().len(), 2);
    }
}
