//! Central constants for the github CLI

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("github-cli/", env!("CARGO_PKG_VERSION"));

    /// Media type requested from the REST API
    pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

    /// Base branch used by `pulls create` when none is given
    pub const DEFAULT_BASE_BRANCH: &str = "main";
}

/// Environment variables read by the CLI
pub mod env {
    /// Personal access token
    pub const TOKEN: &str = "GITHUB_TOKEN";

    /// Alternative API base URL, e.g. for GitHub Enterprise
    pub const API_URL: &str = "GITHUB_API_URL";

    /// `tracing` filter directives
    pub const LOG: &str = "GITHUB_CLI_LOG";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name, looked up in the working directory
    pub const DEFAULT_CONFIG_FILE: &str = ".github-cli.yaml";
}
