//! Liveness and welcome routes.

use axum::Json;
use keyprompt::{HealthResponse, WelcomeResponse};

const WELCOME_MESSAGE: &str = "Welcome to the prompt generator API";

pub(crate) async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
