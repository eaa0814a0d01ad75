//! OpenAI API client
//!
//! A direct HTTP client for the OpenAI Chat Completions API. One
//! non-streaming request per invocation; the prompt is the sole user
//! message.
//!
//! # Authentication
//!
//! Uses an OpenAI API key (from the `OPENAI_API_KEY` environment variable,
//! resolved by provider selection). `OPENAI_BASE_URL` overrides the API
//! base for proxy setups.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use super::{CompletionProvider, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use crate::error::BessieError;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// OpenAI chat-completion provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl OpenAiProvider {
    /// Create a provider for `model` with the given API key
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_base =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base,
        }
    }

    fn build_request(&self, prompt: &str) -> OpenAiRequest {
        // Reasoning models (o-series, gpt-5.x) use max_completion_tokens
        // instead of max_tokens and reject the temperature parameter.
        let is_reasoning_model = self.model.starts_with("o1-")
            || self.model.starts_with("o3-")
            || self.model.starts_with("gpt-5");

        let (max_tokens, max_completion_tokens) = if is_reasoning_model {
            (None, Some(MAX_TOKENS))
        } else {
            (Some(MAX_TOKENS), None)
        };

        let temperature = if is_reasoning_model {
            None
        } else {
            Some(TEMPERATURE)
        };

        OpenAiRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: Some(prompt.to_string()),
                },
            ],
            max_tokens,
            max_completion_tokens,
            temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, BessieError> {
        let request = self.build_request(prompt);
        let url = format!("{}/chat/completions", self.api_base);

        tracing::info!("[OpenAI] Sending chat completion request");
        tracing::debug!("[OpenAI] Model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                BessieError::Provider(format!("failed to send request to OpenAI API: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            BessieError::Provider(format!("failed to read OpenAI response body: {e}"))
        })?;

        tracing::debug!("[OpenAI] Response status: {}", status);

        if !status.is_success() {
            tracing::error!("[OpenAI] API error: {} - {}", status, body);
            return Err(BessieError::Provider(format!(
                "OpenAI API error ({status}): {body}"
            )));
        }

        let parsed: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            BessieError::Provider(format!("failed to parse OpenAI API response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BessieError::Provider("no choices in OpenAI response".to_string()))?;

        if let Some(reason) = &choice.finish_reason {
            tracing::debug!("[OpenAI] finish_reason: {}", reason);
        }

        choice
            .message
            .content
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                BessieError::Provider("empty completion in OpenAI response".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_models_send_max_tokens_and_temperature() {
        let provider = OpenAiProvider::new("sk-test", "gpt-4");
        let request = provider.build_request("hello");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["temperature"], 0.0);
        assert!(json.get("max_completion_tokens").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn reasoning_models_send_max_completion_tokens_only() {
        let provider = OpenAiProvider::new("sk-test", "o3-mini");
        let request = provider.build_request("hello");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_completion_tokens"], 2000);
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_text_is_the_first_choice_content() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "OK"}, "finish_reason": "stop"}
            ]
        }"#;

        let parsed: OpenAiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("OK"));
    }
}
