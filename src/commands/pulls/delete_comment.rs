//! Comment deletion command implementation

use crate::commands::validators::{self, CommandValidationError, validation_error_to_anyhow};
use crate::commands::{Command, CommandContext, RepoTarget};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

/// Delete a pull request comment given its permalink
///
/// `https://github.com/owner/repo/pull/1#issuecomment-1234` deletes comment 1234.
pub struct DeleteCommentCommand {
    pub github_url: String,
}

#[async_trait]
impl Command for DeleteCommentCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Value> {
        let target = RepoTarget::from_url(&self.github_url)?;
        if let Some(reference) = &target.reference {
            validators::validate_endpoint(reference, &["pull"], &self.github_url)?;
        }

        // Without the fragment the parsed number is the pull request, not a comment
        let Some(fragment_id) = validators::comment_fragment_id(&self.github_url) else {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "github-url".to_string(),
                    value: self.github_url.clone(),
                    reason: "expected a comment URL ending in #issuecomment-<id>".to_string(),
                },
            ));
        };
        let comment_id =
            validators::require_url_field(target.url_number(), "comment id", &self.github_url)?;

        // The fragment must sit on the pull request number segment
        if comment_id != fragment_id {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "github-url".to_string(),
                    value: self.github_url.clone(),
                    reason: "expected a comment URL of the form .../pull/<n>#issuecomment-<id>"
                        .to_string(),
                },
            ));
        }

        context
            .client
            .delete_issue_comment(&target.owner, &target.repo, comment_id)
            .await
            .with_context(|| format!("Failed to delete comment {}", comment_id))?;

        info!(owner = %target.owner, repo = %target.repo, comment_id, "comment deleted");

        Ok(json!({
            "comment_id": comment_id,
            "deleted": true,
        }))
    }
}
