//! Effective settings for one invocation

use super::Config;
use crate::constants::github::API_BASE;
use crate::github::GitHubClient;

/// Values given on the command line (or through their environment variables)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub json: bool,
}

/// Settings after applying flags over the config file over built-in defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub token: Option<String>,
    pub json: bool,
}

impl Settings {
    pub fn resolve(overrides: Overrides, config: &Config) -> Self {
        Self {
            api_url: overrides
                .api_url
                .or_else(|| config.api_url.clone())
                .unwrap_or_else(|| API_BASE.to_string()),
            token: overrides.token.or_else(|| config.token.clone()),
            json: overrides.json || config.json,
        }
    }

    /// Client for the resolved API root and token
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_base_url(self.api_url.clone(), self.token.clone())
    }
}
