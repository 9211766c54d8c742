//! Configuration file loading

use crate::constants::config::DEFAULT_CONFIG_FILE;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of the optional YAML configuration file
///
/// ```yaml
/// api_url: https://ghe.example.com/api/v3
/// token: ghp_xxx
/// json: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Print JSON instead of text unless overridden
    #[serde(default)]
    pub json: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or the default file if it exists
    ///
    /// An explicitly named file must exist; the default one is optional.
    pub fn load_config(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::new()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(api_url) = &self.api_url
            && !(api_url.starts_with("https://") || api_url.starts_with("http://"))
        {
            bail!(
                "Invalid api_url '{}': must start with http:// or https://",
                api_url
            );
        }
        if let Some(token) = &self.token
            && token.trim().is_empty()
        {
            bail!("Invalid token: cannot be empty or whitespace only");
        }
        Ok(())
    }
}
