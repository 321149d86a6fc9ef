//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod editor;
mod helpers;
mod host;


use crate::schema::TonemarkConfig;
use tonemark_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TonemarkConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    host::validate_host(&mut errors, config);
    editor::validate_editor(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
