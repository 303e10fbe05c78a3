//! JSON handlers relaying the dashboard's calls to the backend.

#[allow(clippy::missing_errors_doc)]
pub mod pairing;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use rnr_app::ports::{AutomationBackend, BackendReply};

use crate::state::AppState;

/// A backend reply passed through with its own status and body.
pub struct RelayResponse(pub BackendReply);

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::BAD_GATEWAY);
        (status, Json(self.0.body)).into_response()
    }
}

/// Build the relay routes, mounted at the root like the backend's own.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/add_room", post(rooms::add::<B>))
        .route("/rooms", get(rooms::list::<B>))
        .route("/start_pairing", post(pairing::start::<B>))
        .route("/send_pin", post(pairing::send_pin::<B>))
}
