//! HTTP API client wrapping `gloo-net` for the control panel's four calls.
//!
//! Responses are returned as raw JSON: the panels print them verbatim.

use gloo_net::http::{Request, Response};
use rnr_domain::pairing::{StartPairing, SubmitPin};
use rnr_domain::room::NewRoom;
use serde::Deserialize;

/// Error returned by API client methods.
///
/// Transport failures, non-2xx statuses and undecodable bodies all collapse
/// into this one type; only the message is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Message for a non-2xx response, preferring the body's `error` field.
fn status_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) => format!("HTTP {status}: {}", body.error),
        Err(_) => format!("HTTP {status}"),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError {
        message: status_message(status, &body),
    })
}

/// `POST /add_room`
pub async fn add_room(room: &NewRoom) -> Result<serde_json::Value, ApiError> {
    let resp = check_response(Request::post("/add_room").json(room)?.send().await?).await?;
    Ok(resp.json().await?)
}

/// `GET /rooms`
pub async fn fetch_rooms() -> Result<serde_json::Value, ApiError> {
    let resp = check_response(Request::get("/rooms").send().await?).await?;
    Ok(resp.json().await?)
}

/// `POST /start_pairing`
pub async fn start_pairing(request: &StartPairing) -> Result<serde_json::Value, ApiError> {
    let resp = check_response(Request::post("/start_pairing").json(request)?.send().await?).await?;
    Ok(resp.json().await?)
}

/// `POST /send_pin`
pub async fn send_pin(request: &SubmitPin) -> Result<serde_json::Value, ApiError> {
    let resp = check_response(Request::post("/send_pin").json(request)?.send().await?).await?;
    Ok(resp.json().await?)
}
