//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, StaleError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file that must exist.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(StaleError::UserError)` - The file could not be read
    /// * `Err(StaleError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StaleError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            StaleError::ConfigError(msg) => {
                StaleError::ConfigError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are ignored. Blank input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| StaleError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(StaleError::ConfigError(
                "config validation failed: remote must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
