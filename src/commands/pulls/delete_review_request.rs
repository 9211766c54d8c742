//! Review request removal command implementation

use crate::commands::validators::{self, CommandValidationError, validation_error_to_anyhow};
use crate::commands::{Command, CommandContext, RepoTarget};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

/// Withdraw review requests from users and teams
pub struct DeleteReviewRequestCommand {
    pub github_url: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub number: Option<u64>,
    pub reviewers: Vec<String>,
    pub team_reviewers: Vec<String>,
}

impl DeleteReviewRequestCommand {
    fn pull_number(&self, target: &RepoTarget) -> Result<u64> {
        if let Some(number) = self.number {
            return Ok(number);
        }

        match (&self.github_url, &target.reference) {
            (Some(url), Some(reference)) => {
                validators::reject_comment_url(url)?;
                validators::validate_endpoint(reference, &["pull"], url)?;
                validators::require_url_field(reference.number, "pull request number", url)
            }
            _ => Err(validation_error_to_anyhow(
                CommandValidationError::MissingRequired {
                    argument: "--number".to_string(),
                    alternatives: vec!["--github-url".to_string()],
                },
            )),
        }
    }
}

#[async_trait]
impl Command for DeleteReviewRequestCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Value> {
        validators::validate_reviewers(&self.reviewers, &self.team_reviewers)?;

        let target = RepoTarget::resolve(&self.github_url, &self.owner, &self.repo)?;
        let number = self.pull_number(&target)?;
        validators::validate_id("number", number)?;

        let pr = context
            .client
            .delete_review_request(
                &target.owner,
                &target.repo,
                number,
                &self.reviewers,
                &self.team_reviewers,
            )
            .await
            .with_context(|| format!("Failed to remove review requests from #{}", number))?;

        info!(owner = %target.owner, repo = %target.repo, number, "review requests removed");

        let reviewers: Vec<&str> = pr
            .requested_reviewers
            .iter()
            .map(|user| user.login.as_str())
            .collect();
        let teams: Vec<&str> = pr
            .requested_teams
            .iter()
            .map(|team| team.slug.as_str())
            .collect();

        Ok(json!({
            "html_url": pr.html_url,
            "number": pr.number,
            "requested_reviewers": reviewers,
            "requested_teams": teams,
        }))
    }
}
