//! Model clients for the chat-completion providers.
//!
//! Both providers implement [`CompletionProvider`]; the model identifier and
//! the available API keys decide which one handles the request.

pub mod anthropic;
pub mod openai;

use std::env;

use async_trait::async_trait;

use crate::error::BessieError;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

/// System message sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful programming assistant.";

/// Response token ceiling for a single completion.
pub const MAX_TOKENS: u32 = 2000;

/// Sampling temperature; deterministic output is preferred for code.
pub const TEMPERATURE: f32 = 0.0;

/// A chat-completion provider.
///
/// One synchronous-in-spirit request per invocation: the prompt goes out as
/// the sole user message and the top completion's text comes back.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logging
    fn name(&self) -> &str;

    /// Send the prompt and return the completion text
    async fn complete(&self, prompt: &str) -> Result<String, BessieError>;
}

/// Select a provider for `model` from the credentials in the environment.
///
/// Model identifiers starting with `claude` imply the Anthropic API; every
/// other identifier implies the OpenAI API. A missing key for the implied
/// provider is an authentication error, raised before any request is built.
pub fn select_provider(model: &str) -> Result<Box<dyn CompletionProvider>, BessieError> {
    let openai_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
    let anthropic_key = env::var("ANTHROPIC_API_KEY").ok().filter(|k| !k.is_empty());

    provider_for(model, openai_key, anthropic_key)
}

fn provider_for(
    model: &str,
    openai_key: Option<String>,
    anthropic_key: Option<String>,
) -> Result<Box<dyn CompletionProvider>, BessieError> {
    if model.starts_with("claude") {
        match anthropic_key {
            Some(key) => Ok(Box::new(AnthropicProvider::new(key, model))),
            None => Err(BessieError::Authentication(format!(
                "ANTHROPIC_API_KEY is not set (model `{model}` implies the Anthropic API)"
            ))),
        }
    } else {
        match openai_key {
            Some(key) => Ok(Box::new(OpenAiProvider::new(key, model))),
            None => Err(BessieError::Authentication(format!(
                "OPENAI_API_KEY is not set (model `{model}` implies the OpenAI API)"
            ))),
        }
    }
}
