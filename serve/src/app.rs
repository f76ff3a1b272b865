//! Axum app: state, router and middleware.
//!
//! Routes: `GET /`, `GET /health`, `POST /prompt/generate`, `POST /prompt/test`.
//! Layers: panic catch (500 with a redacted body), request tracing, permissive CORS.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use config::ServerSettings;
use keyprompt::{LlmClient, PromptPipeline, SimulatedLlm};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::panic_response;
use super::generate::generate_prompt;
use super::health::{health, root};
use super::test_prompt::test_prompt;

/// Shared state for the HTTP server.
///
/// Holds only immutable, thread-safe handles; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Clarity evaluation and prompt synthesis for `/prompt/generate`.
    pub pipeline: Arc<PromptPipeline>,
    /// Model client for `/prompt/test`.
    pub llm: Arc<dyn LlmClient>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PromptPipeline::default(), Arc::new(SimulatedLlm::new()))
    }
}

impl AppState {
    pub fn new(pipeline: PromptPipeline, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            llm,
        }
    }

    /// Rule-based pipeline over the catalog from `settings.prompts_dir` (or `PROMPTS_DIR` /
    /// `./prompts`, else the embedded defaults) and the simulated LLM.
    pub fn from_settings(settings: &ServerSettings) -> Self {
        let catalog = keyprompt::prompts::load_or_default(settings.prompts_dir.as_deref());
        Self::new(
            PromptPipeline::rule_based(Arc::new(catalog)),
            Arc::new(SimulatedLlm::new()),
        )
    }
}

/// Builds the router with all routes and layers.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/prompt/generate", post(generate_prompt))
        .route("/prompt/test", post(test_prompt))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
