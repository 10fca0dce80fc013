//! Configuration system for jsonpick.
//!
//! This module provides the configuration structure for jsonpick with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments (CLI flags win).
//!
//! # Example
//!
//! ```
//! use jsonpick::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.failure_mode, "raise");
//! assert!(config.include_values);
//!
//! // Create custom configuration
//! let custom = Config {
//!     failure_mode: "warn".to_string(),
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the jsonpick command-line tool.
///
/// # Fields
///
/// * `failure_mode` - How resolution failures are reported: "raise" or
///   "warn" (default: "raise")
/// * `include_values` - Print leaf values alongside their paths
///   (default: true)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How resolution failures are reported: "raise" or "warn"
    #[serde(default = "default_failure_mode")]
    pub failure_mode: String,

    /// Print leaf values alongside their paths
    #[serde(default = "default_include_values")]
    pub include_values: bool,
}

/// Returns the default failure mode name.
fn default_failure_mode() -> String {
    "raise".to_string()
}

/// Returns the default for printing leaf values.
fn default_include_values() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            failure_mode: default_failure_mode(),
            include_values: default_include_values(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonpick/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or
    /// can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.failure_mode, "raise");
        assert!(config.include_values);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(r#"failure_mode = "warn""#).unwrap();
        assert_eq!(config.failure_mode, "warn");
        assert!(config.include_values);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.failure_mode, "raise");
        assert!(config.include_values);
    }
}
