use axum::http::StatusCode;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_health() {
    let (status, body) = common::get(common::app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn e2e_root_welcome() {
    let (status, body) = common::get(common::app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("prompt generator"));
}

#[tokio::test]
async fn e2e_unknown_route_is_not_found() {
    let (status, _) = common::get(common::app(), "/prompt/history").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
