//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Endpoints and default sizes live here; credentials never do — they
/// come from the environment at invocation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Lens provider settings
    #[serde(default)]
    pub lens: LensSettings,

    /// OPS provider settings
    #[serde(default)]
    pub ops: OpsSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Lens provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensSettings {
    /// Search endpoint URL
    #[serde(default = "default_lens_endpoint")]
    pub endpoint: String,

    /// Default number of records to request
    #[serde(default = "default_size")]
    pub size: usize,
}

impl Default for LensSettings {
    fn default() -> Self {
        Self {
            endpoint: default_lens_endpoint(),
            size: default_size(),
        }
    }
}

/// OPS provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsSettings {
    /// Service root URL
    #[serde(default = "default_ops_endpoint")]
    pub endpoint: String,

    /// Default number of records to request
    #[serde(default = "default_size")]
    pub size: usize,
}

impl Default for OpsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_ops_endpoint(),
            size: default_size(),
        }
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: default_true(),
            format: default_format(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
            crate::cli::CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".priorart").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

fn default_lens_endpoint() -> String {
    priorart_lens::DEFAULT_ENDPOINT.to_string()
}

fn default_ops_endpoint() -> String {
    priorart_ops::DEFAULT_ENDPOINT.to_string()
}

fn default_size() -> usize {
    priorart_lens::DEFAULT_SIZE_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lens.endpoint, priorart_lens::DEFAULT_ENDPOINT);
        assert_eq!(config.ops.endpoint, priorart_ops::DEFAULT_ENDPOINT);
        assert!(config.settings.color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [lens]
            size = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.lens.size, 10);
        assert_eq!(config.lens.endpoint, priorart_lens::DEFAULT_ENDPOINT);
        assert_eq!(config.ops.size, priorart_lens::DEFAULT_SIZE_LIMIT);
    }

    #[test]
    fn test_load_from_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.lens.size = 25;
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.lens.size, 25);
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(CliError::Toml(_))
        ));
    }
}
