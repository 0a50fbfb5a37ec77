use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::services::fan_chart::DEFAULT_PATH_COUNT;

pub const API_URL_ENV: &str = "FORECAST_API_URL";
pub const SEED_ENV: &str = "FORECAST_SEED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Base URL of the simulation backend. Empty or missing means the mock
    /// generator is used.
    pub api_url: Option<String>,
    pub fan_paths: usize,
    pub request_timeout_secs: u64,
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            fan_paths: DEFAULT_PATH_COUNT,
            request_timeout_secs: 30,
            seed: None,
        }
    }
}

impl ForecastConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// File settings (when given) overridden by the environment.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|name| env::var(name).ok())
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup(API_URL_ENV) {
            self.api_url = Some(api_url);
        }
        if let Some(seed) = lookup(SEED_ENV) {
            let parsed = seed.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: SEED_ENV,
                value: seed.clone(),
            })?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    /// Configured endpoint, ignoring blank values.
    pub fn backend_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
