use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry budget for one logical list download.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloaderConfig {
    /// Total attempts per download, including the first one (>= 1).
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Pause between consecutive attempts in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Optional HTTP(S) proxy URL applied at the transport level.
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            timeout_ms: default_timeout_ms(),
            cooldown_ms: default_cooldown_ms(),
            proxy: None,
        }
    }
}

impl DownloaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts < 1 {
            return Err(ConfigError::InvalidAttempts);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_attempts() -> u32 {
    3
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_cooldown_ms() -> u64 {
    500
}
