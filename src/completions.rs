//! Completion provider client.
//!
//! Talks to any OpenAI-compatible `/v1/chat/completions` endpoint. The
//! client is constructed once at startup and shared read-only across all
//! tool invocations; availability is a pure configuration check (credential
//! present), never a network probe.
//!
//! Every failure mode here - missing credential, network error, non-2xx
//! status, malformed body, timeout - is recovered by the caller falling back
//! to the deterministic engine. Nothing in this module is surfaced to the
//! MCP client directly.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Default endpoint when `TAILSMITH_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model when `TAILSMITH_MODEL` is not set.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Upper bound on a single completion call. A hung provider becomes a
/// provider failure, which becomes a fallback.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error from a completion attempt
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No credential configured; the LLM path is disabled
    #[error("no API key configured")]
    Unavailable,
    /// Transport-level failure (connect, TLS, timeout)
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("completion API error {status}: {body}")]
    Api { status: u16, body: String },
    /// Response body did not contain a message
    #[error("completion response contained no choices")]
    Empty,
}

/// Provider configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl ProviderConfig {
    /// Read configuration from the process environment.
    ///
    /// `OPENAI_API_KEY` gates availability; absence is the fully-supported
    /// manual-only mode, not an error. `TAILSMITH_BASE_URL` and
    /// `TAILSMITH_MODEL` override the endpoint and model id.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let base_url = std::env::var("TAILSMITH_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("TAILSMITH_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self { api_key, base_url, model }
    }

    /// Manual-only configuration, used by the one-shot CLI commands and tests.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Client for an OpenAI-compatible chat completions API.
pub struct CompletionClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl CompletionClient {
    pub fn new(config: ProviderConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, config }
    }

    /// Whether the LLM path is configured. Local check only - no network.
    pub fn available(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// The configured model id.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request a single completion for `prompt` from `model`.
    pub async fn complete(&self, prompt: &str, model: &str) -> Result<String, CompletionError> {
        let api_key = self.config.api_key.as_deref().ok_or(CompletionError::Unavailable)?;

        let url = format!("{}/v1/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = json!({
            "model": model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "max_tokens": 2048,
            "temperature": 0.2,
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(CompletionError::Api { status, body });
        }

        let data: ApiResponse = response.json().await?;
        let choice = data.choices.into_iter().next().ok_or(CompletionError::Empty)?;
        Ok(choice.message.content.unwrap_or_default())
    }
}

// Response shapes for the chat completions API. Only the fields we read.

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}
