//! Anthropic API client
//!
//! A direct HTTP client for the Anthropic Messages API, mirroring the
//! OpenAI client: one non-streaming request, prompt as the sole user
//! message, system prompt passed through the top-level `system` field.
//!
//! # Authentication
//!
//! Uses an Anthropic API key (from the `ANTHROPIC_API_KEY` environment
//! variable, resolved by provider selection). `ANTHROPIC_BASE_URL`
//! overrides the API base.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use super::{CompletionProvider, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use crate::error::BessieError;

const DEFAULT_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic chat-completion provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl AnthropicProvider {
    /// Create a provider for `model` with the given API key
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_base =
            env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base,
        }
    }

    fn build_request(&self, prompt: &str) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system: SYSTEM_PROMPT.to_string(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String, BessieError> {
        let request = self.build_request(prompt);
        let url = format!("{}/messages", self.api_base);

        tracing::info!("[Anthropic] Sending messages request");
        tracing::debug!("[Anthropic] Model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                BessieError::Provider(format!("failed to send request to Anthropic API: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            BessieError::Provider(format!("failed to read Anthropic response body: {e}"))
        })?;

        tracing::debug!("[Anthropic] Response status: {}", status);

        if !status.is_success() {
            tracing::error!("[Anthropic] API error: {} - {}", status, body);
            return Err(BessieError::Provider(format!(
                "Anthropic API error ({status}): {body}"
            )));
        }

        let parsed: MessagesResponse = serde_json::from_str(&body).map_err(|e| {
            BessieError::Provider(format!("failed to parse Anthropic API response: {e}"))
        })?;

        if let Some(reason) = &parsed.stop_reason {
            tracing::debug!("[Anthropic] stop_reason: {}", reason);
        }

        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(BessieError::Provider(
                "empty completion in Anthropic response".to_string(),
            ));
        }

        Ok(text)
    }
}
