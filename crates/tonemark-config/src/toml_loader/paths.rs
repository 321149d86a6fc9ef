//! Where the config file lives, and writing the documented default there.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tonemark_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that points tonemark at a specific config file.
pub const CONFIG_PATH_ENV: &str = "TONEMARK_CONFIG";

/// The config file path: `$TONEMARK_CONFIG` if set, else
/// `<config dir>/tonemark/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

/// Pick the config path from an explicit override or the platform config dir.
pub(crate) fn resolve_config_path(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("tonemark").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "could not determine config directory; set {CONFIG_PATH_ENV}"
            ))
        })
}

/// Write the documented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
