//! Apple TV pairing handlers.

use axum::Json;
use axum::extract::State;

use rnr_app::ports::AutomationBackend;
use rnr_domain::pairing::{StartPairing, SubmitPin};

use super::RelayResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /start_pairing`
pub async fn start<B>(
    State(state): State<AppState<B>>,
    Json(request): Json<StartPairing>,
) -> Result<RelayResponse, ApiError>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    let reply = state.control_service.start_pairing(request).await?;
    Ok(RelayResponse(reply))
}

/// `POST /send_pin`
pub async fn send_pin<B>(
    State(state): State<AppState<B>>,
    Json(request): Json<SubmitPin>,
) -> Result<RelayResponse, ApiError>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    let reply = state.control_service.send_pin(request).await?;
    Ok(RelayResponse(reply))
}
