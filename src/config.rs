use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionScoutError};

/// Represents the complete configuration for version-scout.
///
/// Only presentation behavior lives here: resolution itself takes no
/// configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for terminal output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Print the file path and source name alongside a resolved version
    #[serde(default = "default_true")]
    pub show_source: bool,

    /// Use colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            show_source: true,
            color: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionscout.toml` in current directory
/// 3. `.versionscout.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versionscout.toml").exists() {
        fs::read_to_string("./versionscout.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versionscout.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| VersionScoutError::config(e.to_string()))?;
    Ok(config)
}
