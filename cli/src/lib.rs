//! Library side of the `keyprompt` binary: argument helpers and one-shot commands.
//!
//! `generate` and `test-prompt` run in-process against the same pipeline and LLM client the
//! HTTP server uses, and print the exact JSON the server would return.

use std::path::Path;
use std::sync::Arc;

use keyprompt::{
    Context, LlmClient, PromptPipeline, PromptRequest, PromptResponse, SimulatedLlm,
    TestPromptResponse,
};

/// CLI-level failures. Printed to stderr by `main`, exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid --context value {0:?}: expected KEY=VALUE")]
    ContextPair(String),
    #[error("keywords must not be empty")]
    EmptyKeywords,
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("LLM API call failed: {0}")]
    Llm(#[from] keyprompt::LlmError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses one `KEY=VALUE` context argument. The key is trimmed; the value is kept as given
/// (it may contain `=`).
pub fn parse_context_pair(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::ContextPair(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::ContextPair(raw.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Builds a context from repeated `--context` arguments; a later key overwrites an earlier one.
pub fn build_context(pairs: &[String]) -> Result<Context, CliError> {
    pairs.iter().map(|p| parse_context_pair(p)).collect()
}

/// Rule-based pipeline over the catalog in `prompts_dir` (or the usual lookup).
pub fn pipeline_for(prompts_dir: Option<&Path>) -> PromptPipeline {
    let catalog = keyprompt::prompts::load_or_default(prompts_dir);
    PromptPipeline::rule_based(Arc::new(catalog))
}

/// Runs one generate round and returns the response body.
pub async fn run_generate(
    pipeline: &PromptPipeline,
    keywords: &str,
    model: Option<String>,
    ctx: Context,
) -> Result<PromptResponse, CliError> {
    if keywords.trim().is_empty() {
        return Err(CliError::EmptyKeywords);
    }
    let mut req = PromptRequest::new(keywords);
    if let Some(m) = model {
        req = req.with_model(m);
    }
    if !ctx.is_empty() {
        req = req.with_context(ctx);
    }
    Ok(pipeline.generate(&req).await)
}

/// Runs a prompt against `llm`.
pub async fn run_test_prompt(
    llm: &dyn LlmClient,
    prompt: &str,
    model: Option<&str>,
) -> Result<TestPromptResponse, CliError> {
    if prompt.trim().is_empty() {
        return Err(CliError::EmptyPrompt);
    }
    let result = llm.invoke(prompt, model).await?;
    Ok(TestPromptResponse { result })
}

/// The LLM client the CLI uses for `test-prompt`.
pub fn default_llm() -> SimulatedLlm {
    SimulatedLlm::new()
}

/// Serializes `value` compact (one line) or pretty.
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}
