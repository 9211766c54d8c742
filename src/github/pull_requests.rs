//! GitHub Pull Request API operations
//!
//! Creation, merging and review housekeeping of pull requests. Comments on
//! the conversation tab of a pull request are issue comments, so they live
//! here too.

use super::client::GitHubClient;
use super::types::{MergeParams, MergeResult, PullRequest, PullRequestParams};
use anyhow::Result;
use reqwest::Method;
use serde_json::json;

impl GitHubClient {
    /// Create a new pull request on GitHub
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_cli::github::{GitHubClient, PullRequestParams};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GitHubClient::new(Some("github_token".to_string()));
    /// let params = PullRequestParams::new(
    ///     "owner",
    ///     "repo",
    ///     "Fix bug in authentication",
    ///     "This PR fixes a critical bug in the auth system",
    ///     "feature-branch",
    ///     "main",
    ///     false
    /// );
    ///
    /// let pr = client.create_pull_request(params).await?;
    /// println!("Created PR: {}", pr.html_url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        self.require_auth("creating pull requests")?;

        let path = format!("/repos/{}/{}/pulls", params.owner, params.repo);
        let payload = json!({
            "title": params.title,
            "body": params.body,
            "head": params.head,
            "base": params.base,
            "draft": params.draft
        });

        self.send_json(Method::POST, &path, Some(&payload)).await
    }

    /// Merge a pull request
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `number` - Pull request number
    /// * `params` - Optional commit title, message, expected head SHA and merge method
    pub async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        params: &MergeParams,
    ) -> Result<MergeResult> {
        self.require_auth("merging pull requests")?;

        let path = format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number);
        let payload = serde_json::to_value(params)?;

        self.send_json(Method::PUT, &path, Some(&payload)).await
    }

    /// Delete a comment from the conversation of an issue or pull request
    pub async fn delete_issue_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()> {
        self.require_auth("deleting comments")?;

        let path = format!("/repos/{}/{}/issues/comments/{}", owner, repo, comment_id);
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// Withdraw review requests from users and teams
    ///
    /// Returns the pull request as it looks afterwards.
    pub async fn delete_review_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> Result<PullRequest> {
        self.require_auth("removing review requests")?;

        let path = format!(
            "/repos/{}/{}/pulls/{}/requested_reviewers",
            owner, repo, number
        );
        let payload = json!({
            "reviewers": reviewers,
            "team_reviewers": team_reviewers,
        });

        self.send_json(Method::DELETE, &path, Some(&payload)).await
    }
}
