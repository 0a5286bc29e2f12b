//! Where the config file lives, and writing the commented default.

use std::path::{Path, PathBuf};

use nova_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Overrides the default config location when set.
pub const CONFIG_PATH_ENV: &str = "NOVA_CONFIG";

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {err}", path.display()))
}

/// `$NOVA_CONFIG`, else `<os config dir>/nova/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("nova").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the documented default config, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_failure("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| io_failure("write default config to", path, e))?;
    info!(path = %path.display(), "created default config");
    Ok(())
}
