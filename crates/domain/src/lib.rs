//! # rnr-domain
//!
//! Wire model shared by the RnR control panel's browser dashboard and its
//! HTTP relay.
//!
//! ## Responsibilities
//! - Request bodies sent to the automation backend (`NewRoom`,
//!   `StartPairing`, `SubmitPin`)
//! - The room listing returned by the backend (`RoomSummary`) and its
//!   one-line rendering
//! - Parsing of the comma-separated light id input
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO, so it
//! compiles unchanged for both the native server and the `wasm32` dashboard.

pub mod error;
pub mod pairing;
pub mod room;
