//! Shared application state for axum handlers.

use std::sync::Arc;

use rnr_app::ports::AutomationBackend;
use rnr_app::services::control_service::ControlService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the backend type itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<B> {
    /// Room and pairing relay.
    pub control_service: Arc<ControlService<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
        }
    }
}

impl<B> AppState<B>
where
    B: AutomationBackend + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(control_service: ControlService<B>) -> Self {
        Self {
            control_service: Arc::new(control_service),
        }
    }
}
