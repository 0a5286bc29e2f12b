//! Reading and parsing `config.toml`.

use std::io::ErrorKind;
use std::path::Path;

use nova_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::NovaConfig;
use crate::validation;

/// Parse a config file. Missing fields take their defaults.
///
/// Validation problems are logged, not returned: a hand-edited file with
/// one bad value still loads. Callers that need a strict check run
/// `validation::validate` themselves.
pub fn load_from_path(path: &Path) -> Result<NovaConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: NovaConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("invalid TOML in {}: {e}", path.display()))
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load from `default_config_path()`, writing a commented default file on
/// first run.
pub fn load_default() -> Result<NovaConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config file, writing defaults");
            create_default_config(&path)?;
            Ok(NovaConfig::default())
        }
        other => other,
    }
}
