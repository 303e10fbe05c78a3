//! Append-only text sink surfacing raw responses and errors on the page.

/// Debug console of the rooms page.
pub const ROOMS_CONSOLE: &str = "#debugConsole";
/// Debug console of the pairing page.
pub const PAIRING_CONSOLE: &str = "#debugConsolePair";

/// Text of a console after appending one message line.
#[must_use]
pub fn appended(existing: &str, message: &str) -> String {
    let mut text = String::with_capacity(existing.len() + message.len() + 1);
    text.push_str(existing);
    text.push_str(message);
    text.push('\n');
    text
}

/// Append `message` to the element matching `selector` and scroll it to the
/// bottom. Does nothing when no element matches.
pub fn append(selector: &str, message: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
    else {
        return;
    };

    let existing = element.text_content().unwrap_or_default();
    element.set_text_content(Some(&appended(&existing, message)));
    element.set_scroll_top(element.scroll_height());
}
