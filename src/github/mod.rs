//! GitHub API integration module
//!
//! ## Architecture
//!
//! - [`client`]: Core GitHub client with authentication and request plumbing
//! - [`auth`]: Token handling
//! - [`pull_requests`]: Pull request creation, merging and review requests
//! - [`projects`]: Project board cards
//! - [`types`]: Request and response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_cli::github::{GitHubClient, MergeParams};
//! use github_url::parse_github_url;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new(Some("your_token".to_string()));
//! let reference = parse_github_url("https://github.com/rust-lang/rust/pull/1")?;
//!
//! if let (Some(owner), Some(repo), Some(number)) =
//!     (reference.owner(), reference.repo(), reference.number)
//! {
//!     let result = client
//!         .merge_pull_request(owner, repo, number, &MergeParams::default())
//!         .await?;
//!     println!("merged: {}", result.merged);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod projects;
pub mod pull_requests;
pub mod types;

// Re-export commonly used items for convenience
pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use types::{
    MergeMethod, MergeParams, MergeResult, ProjectCard, PullRequest, PullRequestParams, Team, User,
};

pub use crate::constants::github::{API_BASE, DEFAULT_USER_AGENT};
