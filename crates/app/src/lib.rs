//! # rnr-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** the relay talks to:
//!   - `AutomationBackend` — the four calls of the automation backend
//! - Define the **driving** use-case:
//!   - `ControlService` — forward room and pairing requests, log outcomes
//!
//! ## Dependency rule
//! Depends on `rnr-domain` only. Never imports adapter crates. Adapters depend
//! on *this* crate, not the reverse.

pub mod ports;
pub mod services;
