//! Resolution of the repository a command acts on

use super::validators::{self, CommandValidationError, validation_error_to_anyhow};
use anyhow::Result;
use github_url::{GitHubReference, parse_github_url};

/// Repository named either by `--owner/--repo` or by a GitHub URL
#[derive(Debug, Clone, PartialEq)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
    /// The parsed URL, when the target came from one
    pub reference: Option<GitHubReference>,
}

impl RepoTarget {
    pub fn resolve(
        github_url: &Option<String>,
        owner: &Option<String>,
        repo: &Option<String>,
    ) -> Result<Self> {
        validators::validate_target_source(github_url, owner, repo)?;

        match (github_url, owner, repo) {
            (Some(url), _, _) => Self::from_url(url),
            (None, Some(owner), Some(repo)) => Ok(Self {
                owner: owner.clone(),
                repo: repo.clone(),
                reference: None,
            }),
            _ => Err(validation_error_to_anyhow(
                CommandValidationError::MissingRequired {
                    argument: "--owner and --repo".to_string(),
                    alternatives: vec!["--github-url".to_string()],
                },
            )),
        }
    }

    /// Target of a repository-scoped GitHub URL
    pub fn from_url(url: &str) -> Result<Self> {
        let reference = parse_github_url(url)?;
        let owner = validators::require_url_field(reference.owner(), "owner", url)?.to_string();
        let repo = validators::require_url_field(reference.repo(), "repository", url)?.to_string();
        Ok(Self {
            owner,
            repo,
            reference: Some(reference),
        })
    }

    /// Number parsed from the URL, if the target came from one
    pub fn url_number(&self) -> Option<u64> {
        self.reference.as_ref().and_then(|reference| reference.number)
    }
}
