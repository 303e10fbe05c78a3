mod debug_console;
mod pairing_panel;
mod rooms_panel;

pub use debug_console::DebugConsole;
pub use pairing_panel::PairingPanel;
pub use rooms_panel::RoomsPanel;

use leptos::html;
use leptos::prelude::*;

/// Current value of a text input, empty if it is not mounted.
fn input_value(input: NodeRef<html::Input>) -> String {
    input.get().map(|el| el.value()).unwrap_or_default()
}
