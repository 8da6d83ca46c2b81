//! Configuration management for levelorder.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traversal::{Algorithm, Order};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "levelorder";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "LEVELORDER_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LEVELORDER_`)
/// 2. TOML config file at `~/.config/levelorder/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Traversal configuration.
    pub traversal: TraversalConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Traversal-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Algorithm used when none is given on the command line.
    pub algorithm: Algorithm,
    /// Level order used when none is given on the command line.
    pub order: Order,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How results are printed.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per level.
    #[default]
    Plain,
    /// JSON document.
    Json,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::BreadthFirst,
            order: Order::BottomUp,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `LEVELORDER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.output.pretty && self.output.format != OutputFormat::Json {
            return Err(Error::config_validation(
                "output.pretty requires output.format = \"json\"",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.traversal.algorithm, Algorithm::BreadthFirst);
        assert_eq!(config.traversal.order, Order::BottomUp);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_pretty_requires_json() {
        let mut config = Config::default();
        config.output.pretty = true;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("output.pretty"));

        config.output.format = OutputFormat::Json;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("levelorder"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[traversal]\nalgorithm = \"iterative-dfs\"\norder = \"top-down\"\n\n[output]\nformat = \"json\"\npretty = true"
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.traversal.algorithm, Algorithm::IterativeDepthFirst);
        assert_eq!(config.traversal.order, Order::TopDown);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = true").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_algorithm() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[traversal]\nalgorithm = \"dijkstra\"").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"algorithm\":\"bfs\""));
        assert!(json.contains("\"order\":\"bottom-up\""));
        assert!(json.contains("\"format\":\"plain\""));
    }

    #[test]
    fn test_traversal_config_deserialize() {
        let json = r#"{"algorithm": "recursive-dfs"}"#;
        let traversal: TraversalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(traversal.algorithm, Algorithm::RecursiveDepthFirst);
        assert_eq!(traversal.order, Order::BottomUp);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
