//! Simulated LLM: echoes the prompt and model instead of calling a provider.

use async_trait::async_trait;

use super::{LlmClient, LlmError};

const DEFAULT_MODEL_LABEL: &str = "default model";

/// Deterministic stand-in for a real model call.
#[derive(Clone, Debug, Default)]
pub struct SimulatedLlm;

impl SimulatedLlm {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for SimulatedLlm {
    async fn invoke(&self, prompt: &str, model: Option<&str>) -> Result<String, LlmError> {
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL_LABEL);
        tracing::debug!(model, prompt_len = prompt.len(), "simulated llm invoke");
        Ok(format!(
            "LLM response for prompt '{}'. Model: {}",
            prompt, model
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_prompt_and_model() {
        let out = SimulatedLlm::new()
            .invoke("Explain caching", Some("gpt-4.1"))
            .await
            .unwrap();
        assert_eq!(out, "LLM response for prompt 'Explain caching'. Model: gpt-4.1");
    }

    #[tokio::test]
    async fn missing_or_blank_model_uses_default_label() {
        let llm = SimulatedLlm::new();
        let a = llm.invoke("p", None).await.unwrap();
        let b = llm.invoke("p", Some(" ")).await.unwrap();
        assert!(a.ends_with("Model: default model"));
        assert_eq!(a, b);
    }
}
