//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rnr_domain::error::RnrError;

/// JSON error body, the same shape the automation backend uses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RnrError`] to an HTTP response with appropriate status code.
pub struct ApiError(RnrError);

impl From<RnrError> for ApiError {
    fn from(err: RnrError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RnrError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RnrError::Backend(err) => {
                tracing::error!(error = %err, "backend error");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
