//! Backend adapter error types.

use rnr_domain::error::{BackendError, RnrError};

/// Errors specific to the HTTP backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpBackendError {
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout, …).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("response from {url} is not JSON")]
    Body {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpBackendError {
    /// Convert into a domain [`BackendError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BackendError {
        match self {
            Self::Client(source) => BackendError::Unreachable(source.to_string()),
            Self::Transport { url, source } => BackendError::Unreachable(format!("{url}: {source}")),
            Self::Body { url, source } => BackendError::InvalidBody(format!("{url}: {source}")),
        }
    }
}

impl From<HttpBackendError> for RnrError {
    fn from(err: HttpBackendError) -> Self {
        RnrError::Backend(err.into_domain())
    }
}
