//! `POST /prompt/generate`: keywords + context in, questions or prompts out.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use keyprompt::{PromptRequest, PromptResponse};

use super::app::AppState;
use super::error::ApiError;

/// Rejects a malformed body or blank keywords with 400 before the pipeline runs.
pub(crate) async fn generate_prompt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let Json(req) = body.map_err(|e| {
        tracing::debug!("generate: rejected body: {}", e);
        ApiError::BadRequest(e.body_text())
    })?;
    if req.keywords.trim().is_empty() {
        return Err(ApiError::BadRequest("keywords must not be empty".to_string()));
    }
    Ok(Json(state.pipeline.generate(&req).await))
}
