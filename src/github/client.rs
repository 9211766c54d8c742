//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the entry point
//! for all GitHub API operations. The client encapsulates authentication, the API base
//! URL and HTTP client state.
//!
//! Endpoint groups extend the client with `impl` blocks in their own modules:
//! - `pull_requests.rs` - Pull request and comment operations
//! - `projects.rs` - Project board operations

use super::auth::GitHubAuth;
use crate::constants::github::{ACCEPT_HEADER, API_BASE, DEFAULT_USER_AGENT};
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// GitHub API client for interacting with GitHub's REST API
///
/// ## Example
///
/// ```rust,no_run
/// use github_cli::github::GitHubClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GitHubClient::new(Some("your_github_token".to_string()));
/// client.delete_issue_comment("owner", "repo", 1234).await?;
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: Option<GitHubAuth>,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a client for `https://api.github.com`
    ///
    /// # Example
    /// ```rust
    /// use github_cli::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(None);
    /// assert!(!client.is_authenticated());
    /// assert_eq!(client.base_url(), "https://api.github.com");
    /// ```
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(API_BASE, token)
    }

    /// Create a client for another API root, such as a GitHub Enterprise server
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            auth: token.map(GitHubAuth::new),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Get the authentication token (if available)
    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token())
    }

    /// Absolute URL for an API path such as `/repos/o/r/pulls`
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fail before any network I/O when the call needs a token
    pub(crate) fn require_auth(&self, action: &str) -> Result<&GitHubAuth> {
        let auth = self.auth.as_ref().ok_or_else(|| {
            anyhow!(
                "GitHub token is required for {}. Use --token or set the GITHUB_TOKEN environment variable.",
                action
            )
        })?;
        auth.validate_token()?;
        Ok(auth)
    }

    /// Send a request and return the decoded body (`Null` for empty bodies)
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%method, path, "sending GitHub API request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", ACCEPT_HEADER);

        if let Some(auth) = &self.auth {
            request = request.header("Authorization", auth.get_auth_header());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to {}", method, url))?;
        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "received GitHub API response");

        let text = response
            .text()
            .await
            .context("Failed to read GitHub API response")?;
        if !status.is_success() {
            return Err(anyhow!(
                "GitHub API error ({}): {}",
                status,
                api_error_message(&text)
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).context("Failed to parse GitHub API response")
    }

    /// [`send`](Self::send) and deserialize the body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let value = self.send(method, path, body).await?;
        serde_json::from_value(value).context("Unexpected GitHub API response shape")
    }
}

/// Human-readable message from a GitHub error body
///
/// GitHub answers with `{"message": ..., "errors": [{"message": ...}]}`;
/// anything else is returned as-is.
pub(crate) fn api_error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() {
            "Unknown error".to_string()
        } else {
            trimmed.to_string()
        };
    };

    let Some(message) = json.get("message").and_then(Value::as_str) else {
        return body.trim().to_string();
    };

    let details: Vec<&str> = json
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error.get("message").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if details.is_empty() {
        message.to_string()
    } else {
        format!("{}: {}", message, details.join("; "))
    }
}
