//! Room handlers.

use axum::Json;
use axum::extract::State;

use rnr_app::ports::AutomationBackend;
use rnr_domain::room::NewRoom;

use super::RelayResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /add_room`
pub async fn add<B>(
    State(state): State<AppState<B>>,
    Json(room): Json<NewRoom>,
) -> Result<RelayResponse, ApiError>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    let reply = state.control_service.add_room(room).await?;
    Ok(RelayResponse(reply))
}

/// `GET /rooms`
pub async fn list<B>(State(state): State<AppState<B>>) -> Result<RelayResponse, ApiError>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    let reply = state.control_service.list_rooms().await?;
    Ok(RelayResponse(reply))
}
