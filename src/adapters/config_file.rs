//! Locating and reading the user's `config.toml`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::parse_config;
use crate::domain::{AppError, FacadConfig};

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV: &str = "FACAD_CONFIG";

const CONFIG_DIR: &str = "facad";
const CONFIG_FILE: &str = "config.toml";

/// Where the configuration is read from, and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `FACAD_CONFIG`; a missing file is an error.
    Explicit(PathBuf),
    /// The per-user default location; a missing file means defaults.
    Default(PathBuf),
    /// No configuration directory could be determined.
    None,
}

pub fn config_source() -> ConfigSource {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => ConfigSource::Explicit(PathBuf::from(path)),
        _ => match dirs::config_dir() {
            Some(dir) => ConfigSource::Default(dir.join(CONFIG_DIR).join(CONFIG_FILE)),
            None => ConfigSource::None,
        },
    }
}

/// Load the configuration from its resolved source.
pub fn load() -> Result<FacadConfig, AppError> {
    match config_source() {
        ConfigSource::Explicit(path) => load_from(&path),
        ConfigSource::Default(path) => match load_from(&path) {
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No configuration at {}, using defaults", path.display());
                Ok(FacadConfig::default())
            }
            other => other,
        },
        ConfigSource::None => Ok(FacadConfig::default()),
    }
}

/// Read and parse the configuration file at `path`.
pub fn load_from(path: &Path) -> Result<FacadConfig, AppError> {
    let content = fs::read_to_string(path)?;
    debug!("Loaded configuration from {}", path.display());
    parse_config(&content).map_err(|err| match err {
        AppError::Configuration(message) => {
            AppError::config_error(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}
