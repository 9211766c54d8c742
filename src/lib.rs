//! github - a command-line client for GitHub pull requests and projects

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod logging;
pub mod output;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use cli::Cli;
pub use commands::{Command, CommandContext};
pub use config::{Config, Settings};
pub use github::GitHubClient;
pub use github_url::{GitHubReference, UrlError, parse_github_url};
