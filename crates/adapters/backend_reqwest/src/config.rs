//! Backend connection configuration.

use serde::Deserialize;

/// Where the automation backend lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://127.0.0.1:5000`. A trailing `/` is ignored.
    pub url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}
