//! What each completed request writes to the page.
//!
//! Kept free of DOM access so the success/failure rules can be tested natively.

use rnr_domain::error::ValidationError;
use rnr_domain::room::RoomSummary;

use crate::api::ApiError;

/// Two-space indented JSON, as printed in the debug consoles.
#[must_use]
pub fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Debug line for a form whose input could not be turned into a request.
#[must_use]
pub fn invalid_input(err: &ValidationError) -> String {
    format!("Error: {err}")
}

/// Debug line for a request whose response is only printed.
#[must_use]
pub fn reply_line(result: &Result<serde_json::Value, ApiError>) -> String {
    match result {
        Ok(value) => pretty(value),
        Err(err) => format!("Error: {err}"),
    }
}

/// Result of a create-room request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRoomOutcome {
    /// Line for the debug console.
    pub log: String,
    /// Whether the rooms list should be refetched.
    pub refresh: bool,
}

impl AddRoomOutcome {
    #[must_use]
    pub fn from_result(result: &Result<serde_json::Value, ApiError>) -> Self {
        Self {
            log: reply_line(result),
            refresh: result.is_ok(),
        }
    }
}

/// Result of a room listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomsOutcome {
    /// Line for the debug console.
    pub log: String,
    /// Replacement listing, absent when the request failed.
    pub rooms: Option<RoomSummary>,
}

impl RoomsOutcome {
    #[must_use]
    pub fn from_result(result: Result<serde_json::Value, ApiError>) -> Self {
        let parsed = result.and_then(|value| {
            let rooms = serde_json::from_value::<RoomSummary>(value.clone())?;
            Ok((value, rooms))
        });
        match parsed {
            Ok((value, rooms)) => Self {
                log: pretty(&value),
                rooms: Some(rooms),
            },
            Err(err) => Self {
                log: format!("Error fetching rooms: {err}"),
                rooms: None,
            },
        }
    }

    /// Replace the displayed listing wholesale; a failed request leaves it as is.
    pub fn apply(self, displayed: &mut RoomSummary) {
        if let Some(rooms) = self.rooms {
            *displayed = rooms;
        }
    }
}
