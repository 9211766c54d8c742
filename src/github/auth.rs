//! GitHub token authentication

use anyhow::{Result, bail};

/// Personal access token used for the `Authorization` header
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Reject tokens that GitHub would refuse anyway
    pub fn validate_token(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            bail!("GitHub token cannot be empty");
        }
        if self.token.chars().any(char::is_whitespace) {
            bail!("GitHub token cannot contain whitespace");
        }
        Ok(())
    }
}

impl std::fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuth").field("token", &"***").finish()
    }
}
