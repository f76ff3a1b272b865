use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use keyprompt::{LlmClient, LlmError, PromptPipeline};
use serde_json::json;
use serve::AppState;

use super::common;

#[tokio::test]
async fn e2e_prompt_test_from_query() {
    let (status, body) = common::post_empty(
        common::app(),
        "/prompt/test?prompt=Explain%20caching&model=gpt-4.1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        "LLM response for prompt 'Explain caching'. Model: gpt-4.1"
    );
}

#[tokio::test]
async fn e2e_prompt_test_from_json_body() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/test",
        &json!({ "prompt": "Explain caching" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].as_str().unwrap().ends_with("Model: default model"));
}

#[tokio::test]
async fn e2e_prompt_test_blank_query_falls_back_to_body() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/test?prompt=&model=",
        &json!({ "prompt": "hello", "model": "o4-mini" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "LLM response for prompt 'hello'. Model: o4-mini");
}

#[tokio::test]
async fn e2e_prompt_test_without_prompt_is_bad_request() {
    let (status, body) = common::post_empty(common::app(), "/prompt/test?model=o4-mini").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "prompt is required");
}

struct DownLlm;

#[async_trait]
impl LlmClient for DownLlm {
    async fn invoke(&self, _prompt: &str, _model: Option<&str>) -> Result<String, LlmError> {
        Err(LlmError::Request("api key sk-should-not-leak rejected".into()))
    }
}

#[tokio::test]
async fn e2e_prompt_test_llm_failure_is_redacted_500() {
    let state = AppState::new(PromptPipeline::default(), Arc::new(DownLlm));
    let (status, body) =
        common::post_empty(common::app_with(state), "/prompt/test?prompt=hi").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "LLM API call failed");
    assert!(!body.to_string().contains("sk-should-not-leak"));
}
