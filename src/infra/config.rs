use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://sebastianaigner.github.io/demo-image-api/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which completed image fetch is allowed to replace the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Only the most recent selection may publish.
    #[default]
    LatestRequest,
    /// Whatever finishes last wins, even if the user moved on.
    LatestCompletion,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub window_width: f32,
    pub window_height: f32,
    pub min_tile_width: f32,
    pub spacing: f32,
    pub selection_policy: SelectionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            window_width: 900.0,
            window_height: 600.0,
            min_tile_width: 180.0,
            spacing: 5.0,
            selection_policy: SelectionPolicy::LatestRequest,
        }
    }
}

impl AppConfig {
    /// Reads a TOML file; fields it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api_base_url must not be empty".to_string(),
            ));
        }
        // Tile URLs are plain concatenations of base and path.
        if !self.api_base_url.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must end with '/', got {}",
                self.api_base_url
            )));
        }
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("min_tile_width", self.min_tile_width),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
