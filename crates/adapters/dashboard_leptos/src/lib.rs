//! # rnr-dashboard
//!
//! Browser dashboard of the RnR control panel, a Leptos client-side app
//! compiled to WASM with `trunk build`.
//!
//! The same bundle is served at `/manage_rooms` and `/pair`; [`start`]
//! resolves a [`PageMode`] from the location once and mounts only the panel
//! for that page.

use leptos::prelude::*;

pub mod api;
mod components;
pub mod debug_log;
pub mod page;
pub mod report;

use components::{PairingPanel, RoomsPanel};
pub use page::PageMode;

/// Root application component for a resolved page.
#[component]
pub fn App(
    /// Page the bundle was loaded on.
    mode: PageMode,
) -> impl IntoView {
    match mode {
        PageMode::Rooms => view! { <RoomsPanel/> }.into_any(),
        PageMode::Pairing => view! { <PairingPanel/> }.into_any(),
        PageMode::Neither => ().into_any(),
    }
}

/// Detect the page and mount its panel into `<body>`.
///
/// On any page other than the rooms and pairing pages nothing is mounted.
pub fn start() {
    let mode = PageMode::detect();
    if mode == PageMode::Neither {
        leptos::logging::log!("rnr-dashboard: no panel for this page");
        return;
    }
    leptos::mount::mount_to_body(move || view! { <App mode/> });
}
