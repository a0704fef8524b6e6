use super::errors::ConfigError;
use super::lists::ListsConfig;
use super::logging::LoggingConfig;
use super::safe_search::SafeSearchConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub safe_search: SafeSearchConfig,

    #[serde(default)]
    pub lists: ListsConfig,
}

impl Config {
    /// Load from a TOML file, or fall back to built-in defaults when no
    /// path is given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Run all construction-time checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.safe_search.validate()?;
        self.lists.downloader.validate()?;
        Ok(())
    }
}
