//! GitHub URL interpreter
//!
//! Turns the URLs users paste from a browser into structured identifiers
//! that command handlers can feed straight into REST calls.
//!
//! ## Modules
//!
//! - [`reference`]: The parsed record and the URL shapes it can come from
//! - [`error`]: Parse failures
//! - [`util`]: The parser itself

mod error;
mod reference;
mod util;

// Re-export public API
pub use error::UrlError;
pub use reference::{GitHubReference, UrlShape, UrlValue};
pub use util::{SUPPORTED_GITHUB_URL_PATTERNS, classify, parse_github_url};
