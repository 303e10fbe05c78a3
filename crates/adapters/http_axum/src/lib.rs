//! # rnr-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the dashboard shell at `/manage_rooms` and `/pair`, plus the
//!   compiled WASM bundle's static assets
//! - Expose the four JSON calls the dashboard makes (`/add_room`, `/rooms`,
//!   `/start_pairing`, `/send_pin`) and relay them through
//!   [`ControlService`](rnr_app::services::control_service::ControlService)
//! - Map application errors into JSON error responses
//!
//! ## Dependency rule
//! Depends on `rnr-app` (for port traits and services) and `rnr-domain`
//! (for request bodies). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
