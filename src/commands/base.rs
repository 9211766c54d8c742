//! Base types and traits for the command pattern

use crate::config::Settings;
use crate::github::GitHubClient;
use anyhow::Result;
use serde_json::Value;

/// Context passed to all commands
pub struct CommandContext {
    /// Client configured with the resolved API root and token
    pub client: GitHubClient,
}

impl CommandContext {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.client())
    }
}

/// Trait that all commands must implement
///
/// A command returns the resource to print; rendering is left to
/// [`crate::output`] so every command reports results the same way.
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<Value>;
}
