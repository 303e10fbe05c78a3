//! Common error types used across the workspace.

/// Top-level error for the relay and its ports.
#[derive(Debug, thiserror::Error)]
pub enum RnrError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Input that could not be turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid light id '{0}'")]
    InvalidLightId(String),
}

/// Failure talking to the automation backend.
///
/// A backend that answers with a non-2xx status is *not* an error at this
/// level: its status and body are relayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend returned an unreadable body: {0}")]
    InvalidBody(String),
}
