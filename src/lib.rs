//! Bessie is a programming assistant.
//!
//! Given a natural-language request and globs of relevant files, bessie
//! renders a prompt from the request and the file contents, sends it to an
//! OpenAI- or Anthropic-compatible chat model, and writes the response to an
//! output file.

pub mod cli;
pub mod error;
pub mod files;
pub mod llm;
pub mod logging;
pub mod prompt;
