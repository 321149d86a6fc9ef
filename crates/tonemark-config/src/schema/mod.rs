//! Configuration schema types for tonemark.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod host;
mod system;

pub use editor::*;
pub use host::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TonemarkConfig {
    pub host: HostConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}
