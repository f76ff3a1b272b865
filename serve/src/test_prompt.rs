//! `POST /prompt/test`: run a finished prompt against the configured LLM client.
//!
//! `prompt` and `model` are read from the query string; a JSON body fills whatever the query
//! leaves out or leaves blank.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use keyprompt::{TestPromptRequest, TestPromptResponse};

use super::app::AppState;
use super::error::ApiError;

pub(crate) async fn test_prompt(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TestPromptRequest>,
    body: Option<Json<TestPromptRequest>>,
) -> Result<Json<TestPromptResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let prompt = non_blank(query.prompt)
        .or(non_blank(body.prompt))
        .ok_or_else(|| ApiError::BadRequest("prompt is required".to_string()))?;
    let model = non_blank(query.model).or(non_blank(body.model));

    match state.llm.invoke(&prompt, model.as_deref()).await {
        Ok(result) => Ok(Json(TestPromptResponse { result })),
        Err(e) => {
            tracing::error!("prompt test: {}", e);
            Err(ApiError::Internal("LLM API call failed"))
        }
    }
}

/// A blank query value counts as absent so the body can still supply it.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
