use std::sync::Arc;
use std::time::Duration;

use serve::AppState;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;

#[tokio::test]
async fn e2e_real_listener_serves_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve::run_serve_on_listener(
        listener,
        Arc::new(AppState::default()),
        async move {
            let _ = shutdown_rx.await;
        },
    ));

    let client = reqwest::Client::new();
    let health: serde_json::Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    let resp = client
        .post(format!("http://{}/prompt/generate", addr))
        .header("origin", "http://localhost:3000")
        .json(&serde_json::json!({ "keywords": "AI" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["needMoreInfo"], true);

    shutdown_tx.send(()).unwrap();
    let result = timeout(Duration::from_secs(5), server).await.unwrap().unwrap();
    assert!(result.is_ok());
}
