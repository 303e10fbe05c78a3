//! Room — a named automation zone pairing an Apple TV with Hue lights.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Body of the create-room request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_name: String,
    pub apple_tv_host: String,
    pub apple_tv_credentials: String,
    pub hue_bridge_ip: String,
    pub hue_user: String,
    pub light_ids: Vec<u32>,
}

impl NewRoom {
    /// Create a builder fed with raw form values.
    #[must_use]
    pub fn builder() -> NewRoomBuilder {
        NewRoomBuilder::default()
    }
}

/// Step-by-step builder for [`NewRoom`].
///
/// Every text value is trimmed; nothing else is checked.
#[derive(Debug, Default)]
pub struct NewRoomBuilder {
    room_name: String,
    apple_tv_host: String,
    apple_tv_credentials: String,
    hue_bridge_ip: String,
    hue_user: String,
    light_ids: String,
}

impl NewRoomBuilder {
    #[must_use]
    pub fn room_name(mut self, value: &str) -> Self {
        self.room_name = value.trim().to_string();
        self
    }

    #[must_use]
    pub fn apple_tv_host(mut self, value: &str) -> Self {
        self.apple_tv_host = value.trim().to_string();
        self
    }

    #[must_use]
    pub fn apple_tv_credentials(mut self, value: &str) -> Self {
        self.apple_tv_credentials = value.trim().to_string();
        self
    }

    #[must_use]
    pub fn hue_bridge_ip(mut self, value: &str) -> Self {
        self.hue_bridge_ip = value.trim().to_string();
        self
    }

    #[must_use]
    pub fn hue_user(mut self, value: &str) -> Self {
        self.hue_user = value.trim().to_string();
        self
    }

    /// Raw comma-separated light id input, parsed on [`build`](Self::build).
    #[must_use]
    pub fn light_ids(mut self, value: &str) -> Self {
        self.light_ids = value.to_string();
        self
    }

    /// Consume the builder and return a [`NewRoom`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLightId`] when a light id entry is
    /// not a non-negative integer.
    pub fn build(self) -> Result<NewRoom, ValidationError> {
        Ok(NewRoom {
            light_ids: parse_light_ids(&self.light_ids)?,
            room_name: self.room_name,
            apple_tv_host: self.apple_tv_host,
            apple_tv_credentials: self.apple_tv_credentials,
            hue_bridge_ip: self.hue_bridge_ip,
            hue_user: self.hue_user,
        })
    }
}

/// Parse a comma-separated list of light ids, keeping input order.
///
/// Entries are trimmed and empty entries are discarded, so `"1, 2,,3"`
/// yields `[1, 2, 3]`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLightId`] carrying the first entry that
/// is not a non-negative integer.
pub fn parse_light_ids(input: &str) -> Result<Vec<u32>, ValidationError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidLightId(entry.to_string()))
        })
        .collect()
}

/// Connection status of a single room as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apple_tv_host: String,
    #[serde(default)]
    pub is_connected: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One named room of a [`RoomSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    pub name: String,
    pub status: RoomStatus,
}

impl RoomEntry {
    /// Render the entry as shown in the rooms list.
    #[must_use]
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RoomEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - AppleTV: {}, Connected: {}",
            self.name, self.status.apple_tv_host, self.status.is_connected
        )
    }
}

/// The full room listing, keyed by unique room name.
///
/// Serialized as a JSON object. Deserialization keeps the backend's key
/// order; a repeated key overwrites the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSummary {
    entries: Vec<RoomEntry>,
}

impl RoomSummary {
    /// Insert a room, replacing any existing room with the same name.
    pub fn insert(&mut self, name: impl Into<String>, status: RoomStatus) {
        let name = name.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.status = status,
            None => self.entries.push(RoomEntry { name, status }),
        }
    }

    /// Look up a room by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RoomStatus> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every room, in listing order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(RoomEntry::line).collect()
    }
}

impl Serialize for RoomSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoomSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SummaryVisitor;

        impl<'de> Visitor<'de> for SummaryVisitor {
            type Value = RoomSummary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of room name to room status")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut summary = RoomSummary::default();
                while let Some((name, status)) = access.next_entry::<String, RoomStatus>()? {
                    summary.insert(name, status);
                }
                Ok(summary)
            }
        }

        deserializer.deserialize_map(SummaryVisitor)
    }
}
