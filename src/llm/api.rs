//! OpenAI-compatible API backend for reply generation.
//!
//! Works against any server implementing the chat completions API
//! (`/v1/chat/completions`): OpenAI, Ollama, vLLM, llama.cpp server, etc.
//! Requests are non-streaming; the shaper needs the complete text to
//! extract the structured payload, so there is nothing to gain from SSE.

use crate::config::LlmConfig;
use crate::error::PracticeError;
use crate::llm::{GeneratorError, ReplyGenerator};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Reply generator using an OpenAI-compatible HTTP API.
pub struct ApiGenerator {
    config: LlmConfig,
    client: reqwest::Client,
    url: String,
}

impl ApiGenerator {
    /// Create a new API-backed generator from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// configured API URL is empty.
    pub fn new(config: &LlmConfig) -> crate::error::Result<Self> {
        if config.api_url.trim().is_empty() {
            return Err(PracticeError::Config("llm.api_url is empty".to_owned()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PracticeError::Generator(format!("HTTP client build failed: {e}")))?;

        let url = completions_url(&config.api_url);

        info!(url = url.as_str(), model = config.api_model.as_str(), "API generator configured");

        Ok(Self {
            config: config.clone(),
            client,
            url,
        })
    }
}

#[async_trait]
impl ReplyGenerator for ApiGenerator {
    fn name(&self) -> &str {
        "api"
    }

    async fn generate_structured_reply(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request_id = Uuid::new_v4();

        let body = serde_json::json!({
            "model": self.config.api_model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": false,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "max_tokens": self.config.max_tokens,
        });

        debug!(%request_id, model = self.config.api_model.as_str(), "sending generation request");

        let mut request = self
            .client
            .post(&self.url)
            .header("content-type", "application/json")
            .json(&body);

        let api_key = self.config.resolved_api_key();
        if !api_key.is_empty() {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(%request_id, error = %e, "generation request failed");
            GeneratorError::Unavailable(format!("connection error: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read body".to_owned());
            error!(%request_id, status = %status, body = body.as_str(), "generation request returned error");
            return Err(map_http_error(status, &body));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            error!(%request_id, error = %e, "generation response was not JSON");
            GeneratorError::Remote(format!("response body parse failed: {e}"))
        })?;

        let content = extract_content(&payload).ok_or_else(|| {
            error!(%request_id, "generation response missing message content");
            GeneratorError::Remote("response missing choices[0].message.content".to_owned())
        })?;

        debug!(%request_id, chars = content.len(), "generation request succeeded");
        Ok(content)
    }
}

/// Normalize a base URL to the chat completions endpoint.
///
/// Accepts URLs with or without a trailing `/v1` or `/`.
fn completions_url(api_url: &str) -> String {
    let base = api_url.strip_suffix("/v1").unwrap_or(api_url);
    let base = base.trim_end_matches('/');
    format!("{base}/v1/chat/completions")
}

/// Pull the assistant text out of a chat completions response body.
fn extract_content(payload: &serde_json::Value) -> Option<String> {
    payload
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

/// Map HTTP error responses to typed generator errors.
///
/// Auth (401/403), quota (429), and server (5xx) failures are
/// [`GeneratorError::Unavailable`]; everything else is provider-reported,
/// so [`GeneratorError::Remote`].
fn map_http_error(status: reqwest::StatusCode, body: &str) -> GeneratorError {
    let detail = extract_error_message(body);

    match status.as_u16() {
        401 | 403 => GeneratorError::Unavailable(format!("authentication failed: {detail}")),
        429 => GeneratorError::Unavailable(format!("rate limit exceeded: {detail}")),
        s if s >= 500 => GeneratorError::Unavailable(format!("provider error {status}: {detail}")),
        _ => GeneratorError::Remote(format!("HTTP {status}: {detail}")),
    }
}

/// Extract a human-readable error message from a provider error response.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no response body".to_owned()
            } else {
                body.chars().take(500).collect()
            }
        })
}
