//! Anthropic Messages API client for care plan completions.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::CompletionError;

/// Model used for care plan generation.
const CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// One-shot completion interface to the hosted model.
///
/// Implementors encapsulate transport and provider wire details; consumers
/// stay decoupled from any particular provider or HTTP client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit a system instruction plus user prompt and return the
    /// generated text.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    api_key: String,
    model: &'static str,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl AnthropicClient {
    /// Create a client with the given credential and request timeout.
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        tracing::info!(model = CLAUDE_MODEL, "Completion client initialized");

        Self {
            api_key: api_key.into(),
            model: CLAUDE_MODEL,
            client,
            timeout_secs,
        }
    }
}

/// Request body for the Messages API.
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from the Messages API.
#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    model: String,
    usage: Usage,
}

#[derive(Deserialize)]
struct ContentBlock {
    // Absent on non-text blocks.
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let body = MessagesRequest {
            model: self.model,
            max_tokens,
            system,
            messages: vec![MessageParam {
                role: "user",
                content: user,
            }],
        };

        tracing::debug!(
            system_len = system.len(),
            user_len = user.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CompletionError::Connection(e.to_string())
                } else if e.is_timeout() {
                    CompletionError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    CompletionError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::ResponseParsing(e.to_string()))?;

        tracing::info!(
            model = %parsed.model,
            tokens = parsed.usage.input_tokens + parsed.usage.output_tokens,
            "Completion response received"
        );

        let text = parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Mock completion client for testing — returns a configurable response
/// or a forced failure, and records the prompts it was given.
pub struct MockCompletionClient {
    response: Result<String, String>,
    last_prompt: Mutex<Option<(String, String)>>,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    /// A client whose every call fails with a provider error.
    pub fn failing(detail: &str) -> Self {
        Self {
            response: Err(detail.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    /// The (system, user) pair from the most recent call.
    pub fn last_prompt(&self) -> Option<(String, String)> {
        self.last_prompt.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        _max_tokens: u32,
    ) -> Result<String, CompletionError> {
        *self.last_prompt.lock().expect("mock lock poisoned") =
            Some((system.to_string(), user.to_string()));

        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(detail) => Err(CompletionError::Api {
                status: 500,
                body: detail.clone(),
            }),
        }
    }
}
