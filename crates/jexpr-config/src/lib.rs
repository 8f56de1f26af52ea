use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::matcher::MatcherConfig;
use self::network::NetworkConfig;
use self::report::ReportConfig;

pub mod dictionary;
pub mod matcher;
pub mod network;
pub mod report;

pub use report::ColorMode;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub matcher: MatcherConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Build from `JEXPR_*` environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            network: NetworkConfig::new(),
            matcher: MatcherConfig::new(),
            report: ReportConfig::new(),
        }
    }

    /// Load a JSON config file. Missing sections and fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
