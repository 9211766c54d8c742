//! `projects` subcommands

use super::validators::{self, CommandValidationError, validation_error_to_anyhow};
use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use github_url::parse_github_url;
use serde_json::{Value, json};
use tracing::info;

/// Add a pull request to a project column
///
/// The column is given by `--column-id` or by a column URL such as
/// `https://github.com/orgs/acme/projects/5#column-99`.
pub struct AddPullRequestCommand {
    pub column_id: Option<u64>,
    pub github_url: Option<String>,
    /// Database ID of the pull request (not its number)
    pub pull_request_id: u64,
}

impl AddPullRequestCommand {
    fn column_id(&self) -> Result<u64> {
        match (self.column_id, &self.github_url) {
            (Some(_), Some(_)) => Err(validation_error_to_anyhow(
                CommandValidationError::MutualExclusivity {
                    first: "--column-id".to_string(),
                    second: "--github-url".to_string(),
                },
            )),
            (Some(column_id), None) => Ok(column_id),
            (None, Some(url)) => {
                let reference = parse_github_url(url)?;
                validators::validate_endpoint(&reference, &["projects"], url)?;
                validators::require_url_field(reference.number, "column id", url)
            }
            (None, None) => Err(validation_error_to_anyhow(
                CommandValidationError::MissingRequired {
                    argument: "--column-id".to_string(),
                    alternatives: vec!["--github-url".to_string()],
                },
            )),
        }
    }
}

#[async_trait]
impl Command for AddPullRequestCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Value> {
        let column_id = self.column_id()?;
        validators::validate_id("column-id", column_id)?;
        validators::validate_id("pull-request-id", self.pull_request_id)?;

        let card = context
            .client
            .create_project_card(column_id, self.pull_request_id)
            .await
            .with_context(|| format!("Failed to add pull request to column {}", column_id))?;

        info!(column_id, card_id = card.id, "project card created");

        Ok(json!({
            "id": card.id,
            "column_url": card.column_url,
            "content_url": card.content_url,
        }))
    }
}
