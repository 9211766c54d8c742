//! `pulls` subcommands

pub mod create;
pub mod delete_comment;
pub mod delete_review_request;
pub mod merge;

pub use create::CreatePullRequestCommand;
pub use delete_comment::DeleteCommentCommand;
pub use delete_review_request::DeleteReviewRequestCommand;
pub use merge::MergePullRequestCommand;
