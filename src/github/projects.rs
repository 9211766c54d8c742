//! GitHub project board operations

use super::client::GitHubClient;
use super::types::ProjectCard;
use anyhow::Result;
use reqwest::Method;
use serde_json::json;

impl GitHubClient {
    /// Add a pull request to a project column as a new card
    ///
    /// # Arguments
    /// * `column_id` - Project column ID
    /// * `pull_request_id` - Database ID of the pull request (not its number)
    pub async fn create_project_card(
        &self,
        column_id: u64,
        pull_request_id: u64,
    ) -> Result<ProjectCard> {
        self.require_auth("adding cards to projects")?;

        let path = format!("/projects/columns/{}/cards", column_id);
        let payload = json!({
            "content_id": pull_request_id,
            "content_type": "PullRequest",
        });

        self.send_json(Method::POST, &path, Some(&payload)).await
    }
}
