//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use rnr_app::ports::AutomationBackend;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the relay routes, the dashboard pages served from `dist_dir`, and
/// `/health`. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<B>(state: AppState<B>, dist_dir: &Path) -> Router
where
    B: AutomationBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<B>())
        .merge(crate::pages::routes::<AppState<B>>(dist_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
