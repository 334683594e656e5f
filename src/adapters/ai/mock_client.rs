//! Mock Completion Client for testing.
//!
//! Provides a configurable mock implementation of the CompletionClient port,
//! allowing tests to run without calling the real completion API.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockCompletionClient::new()
//!     .with_reply(r#"["cough (dry)", "fever (high temperature)"]"#);
//!
//! let response = client.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    ClientInfo, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
    FinishReason,
};

/// Mock completion client for testing.
///
/// Configurable to return specific replies, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Client info to return.
    info: ClientInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a successful completion.
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockFailure),
}

/// Mock failure types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate service unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockFailure> for CompletionError {
    fn from(err: MockFailure) -> Self {
        match err {
            MockFailure::RateLimited { retry_after_secs } => {
                CompletionError::rate_limited(retry_after_secs)
            }
            MockFailure::Unavailable { message } => CompletionError::unavailable(message),
            MockFailure::AuthenticationFailed => CompletionError::AuthenticationFailed,
            MockFailure::Network { message } => CompletionError::network(message),
            MockFailure::Timeout { timeout_secs } => CompletionError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionClient {
    /// Creates a new mock client with default settings.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            info: ClientInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful reply to the queue.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.with_reply_full(content, FinishReason::Stop)
    }

    /// Adds a successful reply with an explicit finish reason.
    pub fn with_reply_full(self, content: impl Into<String>, finish_reason: FinishReason) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Success {
            content: content.into(),
            finish_reason,
        });
        drop(replies);
        self
    }

    /// Adds an error reply to the queue.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Error(failure));
        drop(replies);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the client info.
    pub fn with_client_info(mut self, info: ClientInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next reply or a default.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // Get configured reply
        match self.next_reply() {
            MockReply::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockReply::Error(err) => Err(err.into()),
        }
    }

    fn client_info(&self) -> ClientInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> CompletionRequest {
        CompletionRequest::new("Hello")
    }

    #[tokio::test]
    async fn mock_client_returns_configured_reply() {
        let client = MockCompletionClient::new().with_reply("Hello from mock!");

        let response = client.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_client_returns_replies_in_order() {
        let client = MockCompletionClient::new()
            .with_reply("First")
            .with_reply("Second")
            .with_reply("Third");

        let r1 = client.complete(test_request()).await.unwrap();
        let r2 = client.complete(test_request()).await.unwrap();
        let r3 = client.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r3.content, "Third");
    }

    #[tokio::test]
    async fn mock_client_returns_default_after_exhausted() {
        let client = MockCompletionClient::new().with_reply("Only one");

        let r1 = client.complete(test_request()).await.unwrap();
        let r2 = client.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "Only one");
        assert_eq!(r2.content, "Mock response"); // Default
    }

    #[tokio::test]
    async fn mock_client_returns_configured_error() {
        let client = MockCompletionClient::new()
            .with_failure(MockFailure::RateLimited { retry_after_secs: 30 });

        let result = client.complete(test_request()).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            CompletionError::RateLimited { retry_after_secs: 30 }
        ));
    }

    #[tokio::test]
    async fn mock_client_tracks_calls() {
        let client = MockCompletionClient::new()
            .with_reply("Reply 1")
            .with_reply("Reply 2");

        assert_eq!(client.call_count(), 0);

        client.complete(test_request()).await.unwrap();
        assert_eq!(client.call_count(), 1);

        client.complete(test_request()).await.unwrap();
        assert_eq!(client.call_count(), 2);

        client.clear_calls();
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn mock_client_records_request_content() {
        let client = MockCompletionClient::new().with_reply("ok");

        client
            .complete(CompletionRequest::new("sore throat"))
            .await
            .unwrap();

        let calls = client.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "sore throat");
    }

    #[tokio::test]
    async fn mock_client_respects_delay() {
        let client = MockCompletionClient::new()
            .with_reply("Delayed reply")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        client.complete(test_request()).await.unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(50));
    }

    #[test]
    fn mock_failure_converts_to_completion_error() {
        let err: CompletionError = MockFailure::RateLimited { retry_after_secs: 10 }.into();
        assert!(matches!(err, CompletionError::RateLimited { retry_after_secs: 10 }));

        let err: CompletionError = MockFailure::AuthenticationFailed.into();
        assert!(matches!(err, CompletionError::AuthenticationFailed));

        let err: CompletionError = MockFailure::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, CompletionError::Timeout { timeout_secs: 30 }));
    }
}
