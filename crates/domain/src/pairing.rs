//! Pairing — the two-step Apple TV handshake (start, then PIN).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Apple TV protocol to pair with.
///
/// Unknown names fall back to [`AirPlay`](Self::AirPlay), which is what the
/// backend does with them too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PairingProtocol {
    #[default]
    AirPlay,
    Companion,
    Mrp,
    Dmap,
    Raop,
}

impl PairingProtocol {
    /// Every protocol, in the order offered to the user.
    pub const ALL: [Self; 5] = [
        Self::AirPlay,
        Self::Companion,
        Self::Mrp,
        Self::Dmap,
        Self::Raop,
    ];

    /// Wire name, as sent to the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AirPlay => "airplay",
            Self::Companion => "companion",
            Self::Mrp => "mrp",
            Self::Dmap => "dmap",
            Self::Raop => "raop",
        }
    }

    /// Human-readable label for the protocol dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AirPlay => "AirPlay",
            Self::Companion => "Companion",
            Self::Mrp => "MRP",
            Self::Dmap => "DMAP",
            Self::Raop => "RAOP",
        }
    }

    /// Resolve a wire name case-insensitively, falling back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl From<String> for PairingProtocol {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl fmt::Display for PairingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the pairing-start request.
///
/// Deserializing normalizes `protocol`: a missing or unrecognized name
/// becomes [`PairingProtocol::AirPlay`], so the relay always forwards one of
/// the known protocols rather than the raw value it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPairing {
    pub room_name: String,
    pub apple_tv_host: String,
    #[serde(default)]
    pub protocol: PairingProtocol,
}

impl StartPairing {
    /// Build from raw form values; text values are trimmed.
    #[must_use]
    pub fn new(room_name: &str, apple_tv_host: &str, protocol: PairingProtocol) -> Self {
        Self {
            room_name: room_name.trim().to_string(),
            apple_tv_host: apple_tv_host.trim().to_string(),
            protocol,
        }
    }
}

/// Body of the PIN-submission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPin {
    pub room_name: String,
    pub pin: String,
}

impl SubmitPin {
    /// Build from raw form values; text values are trimmed.
    #[must_use]
    pub fn new(room_name: &str, pin: &str) -> Self {
        Self {
            room_name: room_name.trim().to_string(),
            pin: pin.trim().to_string(),
        }
    }
}
