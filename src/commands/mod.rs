//! Command implementations
//!
//! One type per subcommand. Each validates its options, resolves the target
//! repository or project, makes a single API call and returns the resource
//! to print.

pub mod base;
pub mod parse_url;
pub mod projects;
pub mod pulls;
pub mod target;
pub mod validators;

pub use base::{Command, CommandContext};
pub use parse_url::ParseUrlCommand;
pub use projects::AddPullRequestCommand;
pub use pulls::{
    CreatePullRequestCommand, DeleteCommentCommand, DeleteReviewRequestCommand,
    MergePullRequestCommand,
};
pub use target::RepoTarget;
