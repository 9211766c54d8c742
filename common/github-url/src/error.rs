//! Errors raised while interpreting a GitHub URL

use crate::util::SUPPORTED_GITHUB_URL_PATTERNS;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The input does not contain a `github.com` path at all
    #[error(
        "Invalid GitHub URL. The URL must match one of the following:\n\n- {}",
        SUPPORTED_GITHUB_URL_PATTERNS.join("\n- ")
    )]
    InvalidUrl { input: String },

    /// The trailing segment of a numbered URL holds no usable integer
    #[error("Could not get the project number.")]
    NumberExtraction { segment: String },
}
