//! # rnr-adapter-backend-reqwest
//!
//! Driven adapter implementing [`AutomationBackend`] over HTTP with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Send the four control calls (`/add_room`, `/rooms`, `/start_pairing`,
//!   `/send_pin`) to the configured backend
//! - Hand back every response the backend produced, 2xx or not, with its
//!   JSON body untouched
//! - Translate transport and decoding failures into domain errors
//!
//! ## Dependency rule
//! Same as other adapters: depends on `rnr-app` and `rnr-domain`.

pub mod config;
pub mod error;

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use rnr_app::ports::{AutomationBackend, BackendReply};
use rnr_domain::error::RnrError;
use rnr_domain::pairing::{StartPairing, SubmitPin};
use rnr_domain::room::NewRoom;

pub use config::BackendConfig;
pub use error::HttpBackendError;

/// [`AutomationBackend`] reached through a shared reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Build a backend client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpBackendError::Client`] if the TLS backend or resolver
    /// cannot be initialised.
    pub fn new(config: &BackendConfig) -> Result<Self, HttpBackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(HttpBackendError::Client)?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        url: String,
    ) -> Result<BackendReply, HttpBackendError> {
        let response = request
            .send()
            .await
            .map_err(|source| HttpBackendError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| HttpBackendError::Transport {
                url: url.clone(),
                source,
            })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|source| HttpBackendError::Body { url: url.clone(), source })?
        };

        tracing::debug!(%url, status, "backend replied");
        Ok(BackendReply::new(status, body))
    }
}

impl AutomationBackend for HttpBackend {
    fn add_room(
        &self,
        room: NewRoom,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        async move {
            let url = self.url("/add_room");
            let request = self.client.post(&url).json(&room);
            Ok(self.send(request, url).await?)
        }
    }

    fn list_rooms(&self) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        async move {
            let url = self.url("/rooms");
            let request = self.client.get(&url);
            Ok(self.send(request, url).await?)
        }
    }

    fn start_pairing(
        &self,
        request: StartPairing,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        async move {
            let url = self.url("/start_pairing");
            let builder = self.client.post(&url).json(&request);
            Ok(self.send(builder, url).await?)
        }
    }

    fn send_pin(
        &self,
        request: SubmitPin,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        async move {
            let url = self.url("/send_pin");
            let builder = self.client.post(&url).json(&request);
            Ok(self.send(builder, url).await?)
        }
    }
}
