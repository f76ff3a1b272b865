//! Logging initialization.
//!
//! - **RUST_LOG**: level filter, e.g. `info`, `keyprompt=debug`. When unset: `debug` with
//!   `--debug` (or `DEBUG=true`), else `info`.
//! - **LOG_FILE**: when set, logs are appended to this file as plain text with span ids.
//!   Otherwise they go to stderr so stdout carries only the JSON output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::log_format::TextWithSpanIds;

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug,hyper=info,hyper_util=off"
    } else {
        "info,hyper_util=off"
    }
}

pub fn init(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(TextWithSpanIds::new())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter);
        tracing_subscriber::registry().with(file_layer).try_init()?;
        tracing::info!(path = %path, "keyprompt logging to file");
    } else {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .event_format(TextWithSpanIds::new())
            .with_writer(std::io::stderr)
            .with_filter(filter);
        tracing_subscriber::registry().with(stderr_layer).try_init()?;
    }
    Ok(())
}
