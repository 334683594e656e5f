//! Completion Client Port - Interface for the chat-completion service.
//!
//! Abstracts the upstream completion API so the triage handlers can request
//! replies without coupling to a specific vendor. Every triage operation
//! sends a single prompt (plus an optional system prompt) and reads back a
//! single text reply; there is no conversation threading, no streaming, and
//! no retry at this layer. Callers treat any error as "no usable reply" and
//! substitute canned responses.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat-completion interactions.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one completion request and returns the text reply.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;

    /// Service name and model, for logging and the health route.
    fn client_info(&self) -> ClientInfo;
}

/// One prompt on its way upstream.
///
/// Unset sampling fields are omitted from the wire call, leaving the
/// service's own defaults in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt.
    pub prompt: String,
    /// Optional system prompt framing model behavior.
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets both repetition penalties at once; the suggestion operation is
    /// the only caller and always sets them together.
    pub fn with_penalties(mut self, presence: f32, frequency: f32) -> Self {
        self.presence_penalty = Some(presence);
        self.frequency_penalty = Some(frequency);
        self
    }
}

/// Text reply from one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated text, expected (not guaranteed) to contain JSON.
    pub content: String,
    /// Model that produced the reply.
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the reply.
    Stop,
    /// Truncated at the max_tokens budget.
    Length,
    /// Withheld by the service's content filter.
    ContentFilter,
    /// The service reported an error mid-generation.
    Error,
}

/// Identity of the serving backend, surfaced on the health route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub model: String,
}

impl ClientInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Ways a completion call can fail.
///
/// The variants keep enough detail to log a useful cause; no caller branches
/// on them beyond logging, since every failure degrades to a fallback.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("upstream unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication rejected")]
    AuthenticationFailed,

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response envelope: {0}")]
    Parse(String),

    #[error("request rejected: {0}")]
    InvalidRequest(String),

    #[error("timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl CompletionError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_starts_with_only_the_prompt() {
        let request = CompletionRequest::new("suggest symptoms");

        assert_eq!(request.prompt, "suggest symptoms");
        assert!(request.system_prompt.is_none());
        assert!(request.temperature.is_none());
        assert!(request.max_tokens.is_none());
        assert!(request.presence_penalty.is_none());
        assert!(request.frequency_penalty.is_none());
    }

    #[test]
    fn request_builder_sets_every_field() {
        let request = CompletionRequest::new("suggest symptoms")
            .with_system_prompt("Be precise")
            .with_temperature(0.3)
            .with_max_tokens(500)
            .with_penalties(0.3, 0.3);

        assert_eq!(request.system_prompt.as_deref(), Some("Be precise"));
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.presence_penalty, Some(0.3));
        assert_eq!(request.frequency_penalty, Some(0.3));
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::Stop).unwrap();
        assert_eq!(json, "\"stop\"");

        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
    }

    #[test]
    fn errors_name_their_cause() {
        assert_eq!(
            CompletionError::rate_limited(30).to_string(),
            "rate limited, retry after 30s"
        );
        assert_eq!(
            CompletionError::Timeout { timeout_secs: 60 }.to_string(),
            "timed out after 60s"
        );
        assert_eq!(
            CompletionError::AuthenticationFailed.to_string(),
            "authentication rejected"
        );
    }

    #[test]
    fn client_info_holds_name_and_model() {
        let info = ClientInfo::new("openai", "gpt-4o-mini");
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o-mini");
    }
}
