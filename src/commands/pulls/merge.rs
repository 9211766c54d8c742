//! Pull request merge command implementation

use crate::commands::validators;
use crate::commands::{Command, CommandContext, RepoTarget};
use crate::github::{MergeMethod, MergeParams};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

/// Merge the pull request a URL points at
pub struct MergePullRequestCommand {
    pub github_url: String,
    pub method: Option<MergeMethod>,
    pub commit_title: Option<String>,
    pub commit_message: Option<String>,
    /// Head SHA the pull request must still be at
    pub sha: Option<String>,
}

#[async_trait]
impl Command for MergePullRequestCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Value> {
        validators::reject_comment_url(&self.github_url)?;
        let target = RepoTarget::from_url(&self.github_url)?;
        if let Some(reference) = &target.reference {
            validators::validate_endpoint(reference, &["pull"], &self.github_url)?;
        }
        let number = validators::require_url_field(
            target.url_number(),
            "pull request number",
            &self.github_url,
        )?;

        let params = MergeParams {
            commit_title: self.commit_title.clone(),
            commit_message: self.commit_message.clone(),
            sha: self.sha.clone(),
            merge_method: self.method,
        };

        let result = context
            .client
            .merge_pull_request(&target.owner, &target.repo, number, &params)
            .await
            .with_context(|| format!("Failed to merge pull request #{}", number))?;

        info!(
            owner = %target.owner,
            repo = %target.repo,
            number,
            merged = result.merged,
            "merge requested"
        );

        Ok(json!({
            "sha": result.sha,
            "merged": result.merged,
            "message": result.message,
        }))
    }
}
