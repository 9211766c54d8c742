//! Command-line interface definition

use crate::commands::*;
use crate::config::{Config, Overrides, Settings};
use crate::constants;
use crate::github::MergeMethod;
use anyhow::Result;
use async_trait::async_trait;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "github", bin_name = "github")]
#[command(about = "Manage GitHub pull requests and projects from the command line")]
#[command(version, subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, global = true, env = constants::env::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, global = true, env = constants::env::API_URL)]
    pub api_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage GitHub pull requests
    #[command(subcommand)]
    Pulls(PullsCommands),

    /// Manage GitHub projects
    #[command(subcommand)]
    Projects(ProjectsCommands),

    /// Show how a GitHub URL is interpreted
    ParseUrl {
        /// URL to interpret
        github_url: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PullsCommands {
    /// Create a pull request
    Create {
        /// Branch URL to open the pull request from, e.g. https://github.com/owner/repo/tree/branch
        #[arg(long)]
        github_url: Option<String>,

        /// Repository owner
        #[arg(long)]
        owner: Option<String>,

        /// Repository name
        #[arg(long)]
        repo: Option<String>,

        /// Branch containing the changes
        #[arg(long)]
        head: Option<String>,

        /// Branch to merge into
        #[arg(long, default_value_t = constants::github::DEFAULT_BASE_BRANCH.to_string())]
        base: String,

        /// Title for the pull request
        #[arg(long)]
        title: String,

        /// File containing the pull request description
        #[arg(long, value_name = "FILE")]
        body: Option<PathBuf>,

        /// Create the pull request as a draft
        #[arg(long)]
        draft: bool,
    },

    /// Merge an existing pull request
    Merge {
        /// URL of the pull request, e.g. https://github.com/owner/repo/pull/1
        github_url: String,

        /// Merge method to use
        #[arg(long, value_enum)]
        method: Option<MergeMethod>,

        /// Title for the merge commit
        #[arg(long)]
        commit_title: Option<String>,

        /// Extra detail for the merge commit
        #[arg(long)]
        commit_message: Option<String>,

        /// SHA the pull request head must match
        #[arg(long)]
        sha: Option<String>,
    },

    /// Delete a comment on a pull request
    DeleteComment {
        /// Comment permalink, e.g. https://github.com/owner/repo/pull/1#issuecomment-2
        github_url: String,
    },

    /// Remove requested reviewers from a pull request
    DeleteReviewRequest {
        /// URL of the pull request
        #[arg(long)]
        github_url: Option<String>,

        /// Repository owner
        #[arg(long)]
        owner: Option<String>,

        /// Repository name
        #[arg(long)]
        repo: Option<String>,

        /// Pull request number
        #[arg(long)]
        number: Option<u64>,

        /// Users to remove, comma separated
        #[arg(long, value_delimiter = ',', alias = "requested_reviewers")]
        reviewers: Vec<String>,

        /// Team slugs to remove, comma separated
        #[arg(long, value_delimiter = ',')]
        team_reviewers: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ProjectsCommands {
    /// Add a pull request to a GitHub project column
    AddPullRequest {
        /// Project column ID
        #[arg(long, alias = "column_id")]
        column_id: Option<u64>,

        /// Project column URL, e.g. https://github.com/orgs/owner/projects/1#column-2
        #[arg(long)]
        github_url: Option<String>,

        /// Pull request ID
        #[arg(long, alias = "pull_request_id")]
        pull_request_id: u64,
    },
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            token: self.token.clone(),
            api_url: self.api_url.clone(),
            json: self.json,
        }
    }

    /// Load configuration and execute the selected command
    ///
    /// Returns whether output should be JSON alongside the outcome, so a
    /// configuration error is still reported in the requested format.
    pub async fn run(self) -> (bool, Result<Value>) {
        let config = match Config::load_config(self.config.as_deref()) {
            Ok(config) => config,
            Err(error) => return (self.json, Err(error)),
        };
        let settings = Settings::resolve(self.overrides(), &config);
        debug!(api_url = %settings.api_url, authenticated = settings.token.is_some(), "settings resolved");

        let context = CommandContext::from_settings(&settings);
        let outcome = self.command.into_command().execute(&context).await;
        (settings.json, outcome)
    }
}

impl Commands {
    pub fn into_command(self) -> Box<dyn Command + Send + Sync> {
        match self {
            Commands::Pulls(command) => command.into_command(),
            Commands::Projects(ProjectsCommands::AddPullRequest {
                column_id,
                github_url,
                pull_request_id,
            }) => Box::new(AddPullRequestCommand {
                column_id,
                github_url,
                pull_request_id,
            }),
            Commands::ParseUrl { github_url } => Box::new(ParseUrlCommand { github_url }),
            Commands::Completions { shell } => Box::new(CompletionsCommand { shell }),
        }
    }
}

impl PullsCommands {
    fn into_command(self) -> Box<dyn Command + Send + Sync> {
        match self {
            PullsCommands::Create {
                github_url,
                owner,
                repo,
                head,
                base,
                title,
                body,
                draft,
            } => Box::new(CreatePullRequestCommand {
                github_url,
                owner,
                repo,
                head,
                base,
                title,
                body,
                draft,
            }),
            PullsCommands::Merge {
                github_url,
                method,
                commit_title,
                commit_message,
                sha,
            } => Box::new(MergePullRequestCommand {
                github_url,
                method,
                commit_title,
                commit_message,
                sha,
            }),
            PullsCommands::DeleteComment { github_url } => {
                Box::new(DeleteCommentCommand { github_url })
            }
            PullsCommands::DeleteReviewRequest {
                github_url,
                owner,
                repo,
                number,
                reviewers,
                team_reviewers,
            } => Box::new(DeleteReviewRequestCommand {
                github_url,
                owner,
                repo,
                number,
                reviewers,
                team_reviewers,
            }),
        }
    }
}

/// Completion script for `shell`, returned as the command's resource
pub struct CompletionsCommand {
    pub shell: Shell,
}

#[async_trait]
impl Command for CompletionsCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<Value> {
        let mut command = Cli::command();
        let mut script = Vec::new();
        clap_complete::generate(self.shell, &mut command, "github", &mut script);
        Ok(Value::String(String::from_utf8(script)?))
    }
}
