//! Groq chat-completions client.
//!
//! Talks to the OpenAI-compatible endpoint hosted by Groq. HTTP
//! status codes are mapped onto the [`GenerationError`] taxonomy so
//! the caller can distinguish credential problems from rate limits
//! and generic remote failures.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, Generator};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Hosted generation service client
pub struct GroqClient {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a client with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the endpoint base URL (useful for local stand-ins)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Map a transport error, naming the configured bound when it expired
fn remote_error(e: reqwest::Error, request_timeout: Duration) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Remote(format!("request timed out after {request_timeout:?}"))
    } else {
        GenerationError::Remote(e.to_string())
    }
}

#[async_trait]
impl Generator for GroqClient {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(
        &self,
        prompt: &str,
        request_timeout: Duration,
    ) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
            max_tokens: 2000,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "Sending completion request");

        // Request-level timeout so the bound covers the whole
        // exchange, body read included, not just the initial send.
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(request_timeout)
            .send()
            .await
            .map_err(|e| remote_error(e, request_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {}: {}", status.as_u16(), body.trim());
            return Err(match status.as_u16() {
                401 | 403 => GenerationError::Auth(detail),
                429 => GenerationError::RateLimited(detail),
                _ => GenerationError::Remote(detail),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                remote_error(e, request_timeout)
            } else {
                GenerationError::Malformed(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::Malformed("response contained no choices".to_string()))
    }
}
