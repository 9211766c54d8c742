//! Pull request creation command implementation

use crate::commands::validators::{self, CommandValidationError, validation_error_to_anyhow};
use crate::commands::{Command, CommandContext, RepoTarget};
use crate::github::PullRequestParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::info;

/// Open a pull request from a branch
///
/// The head branch comes from `--head` or from a branch URL such as
/// `https://github.com/owner/repo/tree/feature`.
pub struct CreatePullRequestCommand {
    pub github_url: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub head: Option<String>,
    pub base: String,
    pub title: String,
    /// File whose contents become the pull request description
    pub body: Option<PathBuf>,
    pub draft: bool,
}

impl CreatePullRequestCommand {
    fn head_branch(&self, target: &RepoTarget) -> Result<String> {
        if let Some(head) = &self.head {
            return Ok(head.clone());
        }

        if let (Some(url), Some(reference)) = (&self.github_url, &target.reference) {
            validators::validate_endpoint(reference, &["tree"], url)?;
            let value = validators::require_url_field(reference.value.as_ref(), "branch", url)?;
            return Ok(value.to_string());
        }

        Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "--head".to_string(),
                alternatives: vec!["--github-url <.../tree/BRANCH>".to_string()],
            },
        ))
    }

    fn read_body(&self) -> Result<String> {
        match &self.body {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read body file {}", path.display())),
            None => Ok(String::new()),
        }
    }
}

#[async_trait]
impl Command for CreatePullRequestCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Value> {
        validators::validate_title(&self.title)?;
        validators::validate_branch_name("head", &self.head)?;
        validators::validate_branch_name("base", &Some(self.base.clone()))?;

        let target = RepoTarget::resolve(&self.github_url, &self.owner, &self.repo)?;
        let head = self.head_branch(&target)?;
        let body = self.read_body()?;

        let pr = context
            .client
            .create_pull_request(PullRequestParams::new(
                &target.owner,
                &target.repo,
                &self.title,
                &body,
                &head,
                &self.base,
                self.draft,
            ))
            .await
            .context("Failed to create pull request")?;

        info!(owner = %target.owner, repo = %target.repo, number = pr.number, "pull request created");

        Ok(json!({
            "html_url": pr.html_url,
            "number": pr.number,
            "state": pr.state,
        }))
    }
}
