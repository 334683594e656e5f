//! OpenAI Client - Implementation of CompletionClient for OpenAI's API.
//!
//! Talks to the chat completions endpoint of an OpenAI-compatible service.
//! One request per call, no retries: the triage handlers treat any failure
//! as "no usable reply" and fall back, so retrying here would only delay
//! the fallback.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let client = OpenAIClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    ClientInfo, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
    FinishReason,
};

const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the OpenAI client.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn bearer_token(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API client.
pub struct OpenAIClient {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Lays the request out the way the chat API expects: an optional
    /// system message followed by the single user prompt.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(WireMessage::new("system", system));
        }
        messages.push(WireMessage::new("user", &request.prompt));

        WireRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            presence_penalty: request.presence_penalty,
            frequency_penalty: request.frequency_penalty,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, CompletionError> {
        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.bearer_token())
            .json(&self.to_wire_request(request))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    CompletionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    CompletionError::network(err.to_string())
                }
            })
    }

    async fn check_status(&self, response: Response) -> Result<Response, CompletionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => CompletionError::AuthenticationFailed,
            StatusCode::TOO_MANY_REQUESTS => {
                CompletionError::rate_limited(retry_after_secs(&body))
            }
            StatusCode::BAD_REQUEST => CompletionError::InvalidRequest(body),
            status if status.is_server_error() => {
                CompletionError::unavailable(format!("{status}: {body}"))
            }
            status => CompletionError::network(format!("unexpected status {status}: {body}")),
        })
    }

    async fn decode_body(&self, response: Response) -> Result<CompletionResponse, CompletionError> {
        let envelope: WireResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::parse(err.to_string()))?;

        let choice = envelope
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::parse("no choices in response"))?;

        Ok(CompletionResponse {
            content: choice.message.content,
            model: envelope.model,
            finish_reason: match choice.finish_reason.as_deref() {
                Some("length") => FinishReason::Length,
                Some("content_filter") => FinishReason::ContentFilter,
                _ => FinishReason::Stop,
            },
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let response = self.send_request(&request).await?;
        let response = self.check_status(response).await?;
        self.decode_body(response).await
    }

    fn client_info(&self) -> ClientInfo {
        ClientInfo::new("openai", &self.config.model)
    }
}

/// Pulls the advertised wait out of a 429 body, e.g.
/// `"Rate limit exceeded. Please try again in 30 seconds."`.
fn retry_after_secs(body: &str) -> u32 {
    let Ok(envelope) = serde_json::from_str::<serde_json::Value>(body) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };
    let Some(message) = envelope.pointer("/error/message").and_then(|m| m.as_str()) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };
    let Some(tail) = message.split("try again in ").nth(1) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };
    let digits: String = tail.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

// ----- Chat completions wire types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl WireMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}
