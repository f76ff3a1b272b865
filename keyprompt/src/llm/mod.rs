//! LLM client abstraction for `POST /prompt/test`: run a finished prompt against a model.
//!
//! Only a simulated client exists; a real provider would implement [`LlmClient`] and be
//! injected into the server state.

mod simulated;

pub use simulated::SimulatedLlm;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of an LLM call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("llm request failed: {0}")]
    Request(String),
}

/// Runs one prompt and returns the model's text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// `model` is the caller's model name hint; `None` means the client's default.
    async fn invoke(&self, prompt: &str, model: Option<&str>) -> Result<String, LlmError>;
}
