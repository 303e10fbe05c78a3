//! # rnr-web — RnR control panel server
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the HTTP backend client (adapter)
//! - Construct the control service, injecting the backend via its port trait
//! - Build the axum router, injecting the service and the dashboard bundle
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use rnr_adapter_backend_reqwest::HttpBackend;
use rnr_adapter_http_axum::state::AppState;
use rnr_app::services::control_service::ControlService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading rnr.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Backend
    let backend = HttpBackend::new(&config.backend)?;
    tracing::info!(backend = backend.base_url(), "relaying to automation backend");

    // HTTP
    let dist_dir = &config.dashboard.dist_dir;
    if !dist_dir.join("index.html").is_file() {
        tracing::warn!(
            dist_dir = %dist_dir.display(),
            "dashboard bundle not found, run `trunk build` in crates/adapters/dashboard_leptos"
        );
    }
    let state = AppState::new(ControlService::new(backend));
    let app = rnr_adapter_http_axum::router::build(state, dist_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!("rnr-web listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("rnr-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
