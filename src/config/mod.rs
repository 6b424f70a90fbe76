//! User configuration.
//!
//! Settings are read from an optional TOML file. Every section has defaults,
//! so a missing file or an empty one behaves the same.

mod general;
mod library;
mod output;
mod paths;


use std::{fs, path::Path};

pub use general::{GeneralConfig, LogLevel};
pub use library::LibraryConfig;
pub use output::OutputConfig;
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DocError, Result};

/// Main configuration structure for pkgdoc.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Library source locations.
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Config {
    /// Loads the user configuration.
    ///
    /// With an explicit `path` the file must exist. Without one the default
    /// location is tried and defaults are used when nothing is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not match the configuration schema.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_file(path),
            None => match ConfigPaths::main_config() {
                Ok(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_file(path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading configuration");

        let content = fs::read_to_string(path).map_err(|e| DocError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::from_toml(&content, Some(path))
    }

    fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| DocError::toml_parse(e, path))?;

        value.try_into().map_err(|e| DocError::ConfigValidation {
            component: "config parsing".to_string(),
            details: format!("Configuration validation failed: {e}"),
        })
    }
}
