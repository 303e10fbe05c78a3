//! Control service — relays room and pairing requests to the backend.

use rnr_domain::error::RnrError;
use rnr_domain::pairing::{StartPairing, SubmitPin};
use rnr_domain::room::NewRoom;

use crate::ports::{AutomationBackend, BackendReply};

/// Application service forwarding control-panel requests.
pub struct ControlService<B> {
    backend: B,
}

impl<B: AutomationBackend> ControlService<B> {
    /// Create a new service backed by the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Forward a create-room request.
    ///
    /// # Errors
    ///
    /// Returns [`RnrError::Backend`] when the backend cannot be reached or
    /// answers with an unreadable body.
    #[tracing::instrument(skip(self, room), fields(room_name = %room.room_name, lights = room.light_ids.len()))]
    pub async fn add_room(&self, room: NewRoom) -> Result<BackendReply, RnrError> {
        let reply = self.backend.add_room(room).await?;
        log_reply("add_room", &reply);
        Ok(reply)
    }

    /// Fetch the full room listing.
    ///
    /// # Errors
    ///
    /// Returns [`RnrError::Backend`] when the backend cannot be reached or
    /// answers with an unreadable body.
    #[tracing::instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<BackendReply, RnrError> {
        let reply = self.backend.list_rooms().await?;
        log_reply("list_rooms", &reply);
        Ok(reply)
    }

    /// Forward a pairing-start request.
    ///
    /// # Errors
    ///
    /// Returns [`RnrError::Backend`] when the backend cannot be reached or
    /// answers with an unreadable body.
    #[tracing::instrument(skip(self, request), fields(room_name = %request.room_name, protocol = %request.protocol))]
    pub async fn start_pairing(&self, request: StartPairing) -> Result<BackendReply, RnrError> {
        let reply = self.backend.start_pairing(request).await?;
        log_reply("start_pairing", &reply);
        Ok(reply)
    }

    /// Forward a PIN submission. The PIN itself is never logged.
    ///
    /// # Errors
    ///
    /// Returns [`RnrError::Backend`] when the backend cannot be reached or
    /// answers with an unreadable body.
    #[tracing::instrument(skip(self, request), fields(room_name = %request.room_name))]
    pub async fn send_pin(&self, request: SubmitPin) -> Result<BackendReply, RnrError> {
        let reply = self.backend.send_pin(request).await?;
        log_reply("send_pin", &reply);
        Ok(reply)
    }
}

fn log_reply(call: &'static str, reply: &BackendReply) {
    if reply.is_success() {
        tracing::debug!(call, status = reply.status, "backend call succeeded");
    } else {
        tracing::warn!(call, status = reply.status, body = %reply.body, "backend call rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnr_domain::error::BackendError;
    use rnr_domain::pairing::PairingProtocol;
    use std::future::Future;
    use std::sync::Mutex;

    /// Records every call and answers with a canned reply.
    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<String>>,
        unreachable: bool,
    }

    impl RecordingBackend {
        fn unreachable() -> Self {
            Self {
                unreachable: true,
                ..Self::default()
            }
        }

        fn answer(&self, call: String) -> Result<BackendReply, RnrError> {
            self.calls.lock().unwrap().push(call);
            if self.unreachable {
                return Err(BackendError::Unreachable("connection refused".to_string()).into());
            }
            Ok(BackendReply::new(200, serde_json::json!({ "status": "ok" })))
        }
    }

    impl AutomationBackend for RecordingBackend {
        fn add_room(
            &self,
            room: NewRoom,
        ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
            let result = self.answer(format!("add_room:{}", room.room_name));
            async { result }
        }

        fn list_rooms(&self) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
            let result = self.answer("list_rooms".to_string());
            async { result }
        }

        fn start_pairing(
            &self,
            request: StartPairing,
        ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
            let result = self.answer(format!("start_pairing:{}", request.protocol));
            async { result }
        }

        fn send_pin(
            &self,
            request: SubmitPin,
        ) -> impl Future<Output = Result<BackendReply, RnrError>> + Send {
            let result = self.answer(format!("send_pin:{}", request.pin));
            async { result }
        }
    }

    fn make_service() -> ControlService<RecordingBackend> {
        ControlService::new(RecordingBackend::default())
    }

    #[tokio::test]
    async fn should_forward_add_room() {
        let svc = make_service();
        let room = NewRoom::builder().room_name("Den").build().unwrap();

        let reply = svc.add_room(room).await.unwrap();

        assert!(reply.is_success());
        assert_eq!(*svc.backend.calls.lock().unwrap(), vec!["add_room:Den"]);
    }

    #[tokio::test]
    async fn should_forward_list_rooms() {
        let svc = make_service();
        svc.list_rooms().await.unwrap();
        assert_eq!(*svc.backend.calls.lock().unwrap(), vec!["list_rooms"]);
    }

    #[tokio::test]
    async fn should_forward_pairing_steps_in_call_order() {
        let svc = make_service();
        svc.send_pin(SubmitPin::new("Den", "1234")).await.unwrap();
        svc.start_pairing(StartPairing::new("Den", "h", PairingProtocol::Mrp))
            .await
            .unwrap();

        assert_eq!(
            *svc.backend.calls.lock().unwrap(),
            vec!["send_pin:1234", "start_pairing:mrp"]
        );
    }

    #[tokio::test]
    async fn should_propagate_backend_failure() {
        let svc = ControlService::new(RecordingBackend::unreachable());
        let result = svc.list_rooms().await;
        assert!(matches!(
            result,
            Err(RnrError::Backend(BackendError::Unreachable(_)))
        ));
    }
}
