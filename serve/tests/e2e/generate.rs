use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use keyprompt::{
    BackendError, ClarityVerdict, Context, GeneratedPrompt, PromptBackend, PromptPipeline,
    RuleBasedBackend, SimulatedLlm,
};
use serde_json::json;
use serve::AppState;

use super::common;

#[tokio::test]
async fn e2e_short_keyword_needs_more_info() {
    let (status, body) =
        common::post_json(common::app(), "/prompt/generate", &json!({ "keywords": "AI" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needMoreInfo"], true);
    assert!(body["feedback"].as_str().is_some_and(|f| !f.is_empty()));
    assert_eq!(body["prompts"], json!([]));
    let ids: Vec<&str> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["target_audience", "goal", "tone", "specific_details"]);
    assert!(body["questions"][0]["options"].is_array());
}

#[tokio::test]
async fn e2e_answered_categories_are_not_asked_again() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/generate",
        &json!({ "keywords": "AI", "additionalInfo": { "tone": "friendly", "format": "table" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needMoreInfo"], true);
    let questions = body["questions"].as_array().unwrap();
    assert!(questions.iter().all(|q| q["id"] != "tone"));
    assert!(questions.iter().all(|q| q["answer"] == ""));
}

#[tokio::test]
async fn e2e_answers_are_echoed_in_questions() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/generate",
        &json!({
            "keywords": "AI",
            "additionalInfo": { "specific_details": "intro to transformers" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needMoreInfo"], true);
    let details = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == "specific_details")
        .unwrap();
    assert_eq!(details["answer"], "intro to transformers");
}

#[tokio::test]
async fn e2e_camel_case_context_replaces_snake_case() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/generate",
        &json!({
            "keywords": "newsletter for customers",
            "additional_info": { "tone": "formal" },
            "additionalInfo": { "goal": "retention" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needMoreInfo"], true);
    let ids: Vec<&str> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["tone"]);
}

#[tokio::test]
async fn e2e_clear_request_returns_prompts() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/generate",
        &json!({
            "keywords": "blog post for developers about caching, professional tone, goal: educate",
            "model": "gpt-4.1",
            "additional_info": {
                "target_audience": "developer",
                "tone": "professional",
                "goal": "educate"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needMoreInfo"], false);
    let prompts = body["prompts"].as_array().unwrap();
    assert_eq!(prompts.len(), 2);
    for p in prompts {
        assert!(p["prompt"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(p["description"].as_str().is_some_and(|s| !s.is_empty()));
    }
}

#[tokio::test]
async fn e2e_study_plan_returns_three_prompts() {
    let (status, body) = common::post_json(
        common::app(),
        "/prompt/generate",
        &json!({
            "keywords": "college student study plan for exam prep",
            "additionalInfo": {
                "target_audience": "college student",
                "goal": "pass exam",
                "tone": "encouraging"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let prompts = body["prompts"].as_array().unwrap();
    assert_eq!(prompts.len(), 3);
    assert!(prompts
        .iter()
        .all(|p| p["prompt"].as_str().unwrap().contains("college student")));
}

#[tokio::test]
async fn e2e_missing_keywords_is_bad_request() {
    let (status, body) =
        common::post_json(common::app(), "/prompt/generate", &json!({ "model": "o4-mini" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("keywords"));
}

#[tokio::test]
async fn e2e_blank_keywords_is_bad_request() {
    let (status, body) =
        common::post_json(common::app(), "/prompt/generate", &json!({ "keywords": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "keywords must not be empty");
}

#[tokio::test]
async fn e2e_invalid_json_is_bad_request() {
    let (status, body) =
        common::post_raw(common::app(), "/prompt/generate", "not valid json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

/// Backend that panics, standing in for an unexpected fault outside the rule-based core.
struct PanickingBackend;

#[async_trait]
impl PromptBackend for PanickingBackend {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn evaluate_clarity(
        &self,
        _keywords: &str,
        _ctx: &Context,
    ) -> Result<ClarityVerdict, BackendError> {
        panic!("secret internal state");
    }

    async fn synthesize_prompts(
        &self,
        _keywords: &str,
        _model: Option<&str>,
        _ctx: &Context,
    ) -> Result<Vec<GeneratedPrompt>, BackendError> {
        panic!("secret internal state");
    }
}

#[tokio::test]
async fn e2e_unexpected_fault_is_redacted_500() {
    let state = AppState::new(
        PromptPipeline::new(Arc::new(PanickingBackend), RuleBasedBackend::default()),
        Arc::new(SimulatedLlm::new()),
    );
    let (status, body) = common::post_json(
        common::app_with(state),
        "/prompt/generate",
        &json!({ "keywords": "caching" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "internal server error" }));
}
