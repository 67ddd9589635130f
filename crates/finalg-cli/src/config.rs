//! Configuration file support for the finalg CLI
//!
//! Supports loading configuration from .finalgrc files in:
//! - Current directory
//! - User home directory
//! - Custom path via environment variable

use anyhow::{Context, Result};
use finalg_core::AlgebraConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".finalgrc";
const CONFIG_ENV: &str = "FINALG_CONFIG";

/// Configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable colored output
    pub colored: bool,

    /// Algebra construction and report settings
    pub algebra: AlgebraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colored: true,
            algebra: AlgebraConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load configuration file
    ///
    /// Search order:
    /// 1. FINALG_CONFIG environment variable
    /// 2. .finalgrc in current directory
    /// 3. .finalgrc in user home directory
    pub fn load_default() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if let Ok(config) = Self::load(Path::new(&path)) {
                return config;
            }
        }

        let current_config = PathBuf::from(CONFIG_FILE);
        if current_config.exists() {
            if let Ok(config) = Self::load(&current_config) {
                return config;
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(CONFIG_FILE);
            if home_config.exists() {
                if let Ok(config) = Self::load(&home_config) {
                    return config;
                }
            }
        }

        Self::default()
    }

    /// Get configuration file path (current or home)
    pub fn config_path() -> PathBuf {
        let current = PathBuf::from(CONFIG_FILE);
        if current.exists() {
            return current;
        }

        if let Some(home) = dirs::home_dir() {
            home.join(CONFIG_FILE)
        } else {
            current
        }
    }

    /// Create a default configuration file
    pub fn create_default() -> Result<PathBuf> {
        let config = Self::default();
        let path = Self::config_path();
        config.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.colored);
        assert_eq!(config.algebra.delimiter, ":");
        assert!(config.algebra.non_trivial);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[algebra]\ndelimiter = \"-\"\n").unwrap();
        assert!(config.colored);
        assert_eq!(config.algebra.delimiter, "-");
        assert_eq!(config.algebra.report_max_size, 12);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.colored = false;
        config.algebra.use_names = true;
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "colored = maybe").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
