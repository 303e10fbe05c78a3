//! Which page the dashboard was loaded on.

/// The page variant, determined once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// `/manage_rooms`: room creation and listing.
    Rooms,
    /// `/pair`: Apple TV pairing handshake.
    Pairing,
    /// Any other page; nothing is mounted.
    Neither,
}

impl PageMode {
    /// Resolve the mode from a location path. A trailing `/` is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/manage_rooms" => Self::Rooms,
            "/pair" => Self::Pairing,
            _ => Self::Neither,
        }
    }

    /// Resolve the mode from the current document location.
    #[must_use]
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map_or(Self::Neither, |path| Self::from_path(&path))
    }
}
