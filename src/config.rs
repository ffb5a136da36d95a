//! Engine configuration
//!
//! Controls how delimited edge lists are read. Defaults match a plain
//! `source,target,weight` file with no header.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Edge-list reading configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Field separator between source, target and weight
    pub delimiter: char,
    /// Skip the first non-empty, non-comment line
    pub has_header: bool,
    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,
    /// Strip surrounding whitespace from the two labels
    pub trim_fields: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            comment_prefix: None,
            trim_fields: true,
        }
    }
}

impl GraphConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: GraphConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject settings the reader cannot honour.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(ConfigError::Invalid(
                "delimiter cannot be a line break".to_string(),
            ));
        }
        if matches!(self.comment_prefix.as_deref(), Some("")) {
            return Err(ConfigError::Invalid(
                "comment_prefix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
