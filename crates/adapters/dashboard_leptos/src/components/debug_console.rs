//! On-page scrolling text area written to by [`debug_log::append`](crate::debug_log::append).

use leptos::prelude::*;

/// An empty console element; its text is managed outside the reactive tree.
#[component]
pub fn DebugConsole(
    /// CSS id selector the panels append to, e.g. `#debugConsole`.
    selector: &'static str,
) -> impl IntoView {
    view! {
        <h2>"Debug"</h2>
        <pre id={selector.trim_start_matches('#')} class="debug-console"></pre>
    }
}
