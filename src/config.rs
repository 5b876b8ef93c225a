//! Configuration Management
//!
//! Loads defaults for the CLI from TOML files:
//! - Index unit used by `prefix`, `suffix` and `length`
//! - Reversal mode used by `reverse`
//! - Log level and format

use crate::errors::StrsafeError;
use crate::reverse::ReverseMode;
use crate::substring::IndexUnit;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Operation defaults; CLI flags override these per invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub index_unit: IndexUnit,
    #[serde(default)]
    pub reverse_mode: ReverseMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON log lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|e| {
                    StrsafeError::Config(format!("Failed to read config from {}: {}", p, e))
                })?;
                Self::from_toml_str(&content)?
            }
            None => {
                let mut default_paths = vec![PathBuf::from("strsafe.toml")];
                if let Some(dir) = dirs::config_dir() {
                    default_paths.push(dir.join("strsafe").join("config.toml"));
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        debug!(path = %p.display(), "Loaded config");
                        loaded = Some(Self::from_toml_str(&content)?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        // Override with environment variables
        if let Ok(unit) = std::env::var("STRSAFE_INDEX_UNIT") {
            config.defaults.index_unit = IndexUnit::from_str(&unit, true).map_err(|_| {
                StrsafeError::Config(format!("Invalid STRSAFE_INDEX_UNIT '{}'", unit))
            })?;
        }
        if let Ok(mode) = std::env::var("STRSAFE_REVERSE_MODE") {
            config.defaults.reverse_mode = ReverseMode::from_str(&mode, true).map_err(|_| {
                StrsafeError::Config(format!("Invalid STRSAFE_REVERSE_MODE '{}'", mode))
            })?;
        }

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)
            .map_err(|e| StrsafeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}
