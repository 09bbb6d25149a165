//! Application settings configuration
//!
//! Defines timeouts, port, threshold, and parallelism for check runs.

use crate::runner::{DEFAULT_EXPIRY_THRESHOLD_DAYS, DEFAULT_PARALLELISM};
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Certificate check settings
#[derive(Debug, Clone, Deserialize)]
pub struct CheckSettings {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_handshake_timeout")]
    pub handshake_timeout_secs: u64,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_threshold")]
    pub expiry_threshold_days: i64,
    #[serde(default = "default_parallel")]
    pub parallel: usize,
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_handshake_timeout() -> u64 {
    5
}

fn default_port() -> u16 {
    443
}

fn default_threshold() -> i64 {
    DEFAULT_EXPIRY_THRESHOLD_DAYS
}

fn default_parallel() -> usize {
    DEFAULT_PARALLELISM
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            handshake_timeout_secs: default_handshake_timeout(),
            port: default_port(),
            expiry_threshold_days: default_threshold(),
            parallel: default_parallel(),
        }
    }
}

impl CheckSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub check: CheckSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
