//! tonemark configuration system.
//!
//! TOML-based configuration for the tone styling bridge. Every section uses
//! serde defaults so an empty or partial file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tonemark_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    EditorConfig, HostConfig, LogLevel, LoggingConfig, TonemarkConfig, CONFIG_SCHEMA_VERSION,
};

use tonemark_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists yet.
pub fn load_config() -> Result<TonemarkConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TonemarkConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
