//! GitHub request and response types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Parameters for creating a pull request
#[derive(Debug, Clone)]
pub struct PullRequestParams<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub draft: bool,
}

impl<'a> PullRequestParams<'a> {
    pub fn new(
        owner: &'a str,
        repo: &'a str,
        title: &'a str,
        body: &'a str,
        head: &'a str,
        base: &'a str,
        draft: bool,
    ) -> Self {
        Self {
            owner,
            repo,
            title,
            body,
            head,
            base,
            draft,
        }
    }
}

/// How a pull request is merged into its base branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// All commits are added to the base branch in a merge commit
    Merge,
    /// All commits are squashed into a single commit
    Squash,
    /// All commits are added to the base branch individually
    Rebase,
}

/// Optional fields of a merge request
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequest {
    pub html_url: String,
    pub number: u64,
    pub state: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub requested_reviewers: Vec<User>,
    #[serde(default)]
    pub requested_teams: Vec<Team>,
}

/// Response of `PUT /repos/{owner}/{repo}/pulls/{number}/merge`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MergeResult {
    pub sha: Option<String>,
    pub merged: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectCard {
    pub id: u64,
    pub column_url: Option<String>,
    pub content_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_params_skip_absent_fields() {
        let params = MergeParams {
            merge_method: Some(MergeMethod::Squash),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "merge_method": "squash" })
        );
    }

    #[test]
    fn test_pull_request_tolerates_missing_reviewers() {
        let pr: PullRequest = serde_json::from_value(json!({
            "html_url": "https://github.com/o/r/pull/1",
            "number": 1,
            "state": "open"
        }))
        .unwrap();
        assert!(pr.requested_reviewers.is_empty());
        assert!(pr.title.is_empty());
    }
}
