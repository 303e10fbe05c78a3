//! Backend port — the automation service that owns rooms and pairing.

use std::future::Future;

use rnr_domain::error::RnrError;
use rnr_domain::pairing::{StartPairing, SubmitPin};
use rnr_domain::room::NewRoom;

/// A response received from the backend, whatever its status.
///
/// The body is kept as raw JSON: the dashboard prints it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    /// HTTP status code returned by the backend.
    pub status: u16,
    /// Decoded JSON body.
    pub body: serde_json::Value,
}

impl BackendReply {
    /// Build a reply.
    #[must_use]
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The automation backend's HTTP surface.
///
/// Implementations return `Ok` for every response the backend produced,
/// including non-2xx ones; `Err` is reserved for transport failures and
/// unreadable bodies.
pub trait AutomationBackend {
    /// `POST /add_room`
    fn add_room(
        &self,
        room: NewRoom,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send;

    /// `GET /rooms`
    fn list_rooms(&self) -> impl Future<Output = Result<BackendReply, RnrError>> + Send;

    /// `POST /start_pairing`
    fn start_pairing(
        &self,
        request: StartPairing,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send;

    /// `POST /send_pin`
    fn send_pin(
        &self,
        request: SubmitPin,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send;
}

impl<T: AutomationBackend + Send + Sync> AutomationBackend for std::sync::Arc<T> {
    fn add_room(
        &self,
        room: NewRoom,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        (**self).add_room(room)
    }

    fn list_rooms(&self) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        (**self).list_rooms()
    }

    fn start_pairing(
        &self,
        request: StartPairing,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        (**self).start_pairing(request)
    }

    fn send_pin(
        &self,
        request: SubmitPin,
    ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
        (**self).send_pin(request)
    }
}
