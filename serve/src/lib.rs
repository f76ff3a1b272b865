//! HTTP server for keyprompt (axum).
//!
//! Listens on `HOST:PORT` (default `0.0.0.0:8000`) and serves `/prompt/generate`,
//! `/prompt/test`, `/` and `/health`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`], [`AppState`].

mod app;
mod error;
mod generate;
mod health;
mod test_prompt;

use std::future::Future;
use std::sync::Arc;

use config::ServerSettings;
use tokio::net::TcpListener;
use tracing::info;

pub use app::{router, AppState};

/// Serves on an existing listener until `shutdown` resolves. Used by tests (bind to
/// 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        backend = state.pipeline.backend_name(),
        "HTTP server listening on http://{}", addr
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Binds `settings.addr()` and serves until Ctrl-C.
pub async fn run_serve(
    settings: &ServerSettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = Arc::new(AppState::from_settings(settings));
    let listener = TcpListener::bind(settings.addr()).await?;
    run_serve_on_listener(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
