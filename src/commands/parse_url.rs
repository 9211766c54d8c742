//! Parse URL command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use github_url::parse_github_url;
use serde_json::Value;

/// Show how a GitHub URL is interpreted, without calling the API
pub struct ParseUrlCommand {
    pub github_url: String,
}

#[async_trait]
impl Command for ParseUrlCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<Value> {
        let reference = parse_github_url(&self.github_url)?;
        Ok(serde_json::to_value(reference)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::GitHubClient;

    #[tokio::test]
    async fn test_parse_url_command() {
        let context = CommandContext::new(GitHubClient::new(None));
        let command = ParseUrlCommand {
            github_url: "https://github.com/orgs/Acme/projects/5#column-99".to_string(),
        };

        let value = command.execute(&context).await.unwrap();
        assert_eq!(value["shape"], "org_project");
        assert_eq!(value["scope"], "orgs");
        assert_eq!(value["owner"], "Acme");
        assert_eq!(value["number"], 99);
        assert!(value["repo"].is_null());
    }

    #[tokio::test]
    async fn test_parse_url_command_invalid() {
        let context = CommandContext::new(GitHubClient::new(None));
        let command = ParseUrlCommand {
            github_url: "not-a-url".to_string(),
        };
        assert!(command.execute(&context).await.is_err());
    }
}
