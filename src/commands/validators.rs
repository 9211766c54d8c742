//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles the rules clap cannot express, such as
//! "either a URL or owner and repo" and fields a parsed URL must carry.

use anyhow::{Result, anyhow};
use github_url::GitHubReference;

/// Fragment GitHub appends to a comment permalink
pub const COMMENT_FRAGMENT: &str = "#issuecomment-";

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Empty collection when at least one item is required
    EmptyCollection { argument: String },
    /// A GitHub URL parsed, but lacks a part the command needs
    MissingUrlField { field: String, url: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::EmptyCollection { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
            CommandValidationError::MissingUrlField { field, url } => {
                write!(f, "Could not find the {} in GitHub URL '{}'", field, url)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate where a command gets its repository from
///
/// Either `--github-url`, or both `--owner` and `--repo`, never a mix.
pub fn validate_target_source(
    github_url: &Option<String>,
    owner: &Option<String>,
    repo: &Option<String>,
) -> Result<()> {
    match (github_url, owner, repo) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--github-url".to_string(),
                second: "--owner/--repo".to_string(),
            },
        )),
        (None, None, _) => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "--owner".to_string(),
                alternatives: vec!["--github-url".to_string()],
            },
        )),
        (None, _, None) => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "--repo".to_string(),
                alternatives: vec!["--github-url".to_string()],
            },
        )),
        _ => Ok(()),
    }
}

/// Take a field out of a parsed URL, naming it if it is absent
pub fn require_url_field<T>(value: Option<T>, field: &str, url: &str) -> Result<T> {
    value.ok_or_else(|| {
        validation_error_to_anyhow(CommandValidationError::MissingUrlField {
            field: field.to_string(),
            url: url.to_string(),
        })
    })
}

/// Ensure a parsed URL points at one of the expected endpoints
pub fn validate_endpoint(reference: &GitHubReference, expected: &[&str], url: &str) -> Result<()> {
    let endpoint = require_url_field(reference.endpoint(), "endpoint", url)?;
    if !expected.contains(&endpoint) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "github-url".to_string(),
                value: url.to_string(),
                reason: format!(
                    "expected a /{}/ URL, found /{}/",
                    expected.join("/ or /"),
                    endpoint
                ),
            },
        ));
    }
    Ok(())
}

/// Comment id named by the `#issuecomment-<id>` fragment of a URL
pub fn comment_fragment_id(url: &str) -> Option<u64> {
    let (_, fragment) = url.split_once(COMMENT_FRAGMENT)?;
    let end = fragment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(fragment.len());
    fragment[..end].parse().ok()
}

/// Reject comment permalinks where a pull request URL is expected
///
/// The number of such a URL is the comment id, not the pull request.
pub fn reject_comment_url(url: &str) -> Result<()> {
    if url.contains(COMMENT_FRAGMENT) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "github-url".to_string(),
                value: url.to_string(),
                reason: "expected a pull request URL, not a comment permalink".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a GitHub ID; GitHub never hands out zero
pub fn validate_id(argument: &str, id: u64) -> Result<()> {
    if id == 0 {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: id.to_string(),
                reason: "must be a positive integer".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate pull request title
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "title".to_string(),
                value: title.to_string(),
                reason: "title cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate branch name
///
/// Ensures branch names follow basic Git naming conventions
pub fn validate_branch_name(argument: &str, branch: &Option<String>) -> Result<()> {
    if let Some(name) = branch {
        if name.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: argument.to_string(),
                    value: name.clone(),
                    reason: "branch name cannot be empty or whitespace only".to_string(),
                },
            ));
        }

        // Basic Git branch name validation
        if name.starts_with('-') || name.ends_with('.') || name.contains("..") {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: argument.to_string(),
                    value: name.clone(),
                    reason: "invalid Git branch name format".to_string(),
                },
            ));
        }
    }
    Ok(())
}

/// Validate reviewer lists of a review-request removal
///
/// At least one user or team is required and no entry may be blank.
pub fn validate_reviewers(reviewers: &[String], team_reviewers: &[String]) -> Result<()> {
    if reviewers.is_empty() && team_reviewers.is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyCollection {
                argument: "--reviewers or --team-reviewers".to_string(),
            },
        ));
    }

    for (argument, names) in [("reviewers", reviewers), ("team-reviewers", team_reviewers)] {
        if let Some(name) = names.iter().find(|name| name.trim().is_empty()) {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: argument.to_string(),
                    value: name.clone(),
                    reason: "names cannot be empty or whitespace only".to_string(),
                },
            ));
        }
    }
    Ok(())
}
