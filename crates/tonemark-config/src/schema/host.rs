//! Host application configuration.

use serde::{Deserialize, Serialize};

/// Information about the host the bridge runs inside.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Host version override (e.g. `"2.1.54"`). When unset, the embedding
    /// application supplies the version it is running under.
    pub version: Option<String>,
}
