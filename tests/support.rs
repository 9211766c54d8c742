//! Common test support utilities and fixtures
//!
//! Shared helpers for integration tests: running the binary and pointing
//! commands at a `wiremock` server instead of api.github.com.

#![allow(dead_code)]

use github_cli::{CommandContext, GitHubClient};
use std::path::Path;
use std::process::Command;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "ghp_test_token";

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the github CLI with given arguments
///
/// Token and API variables from the caller's environment are removed so
/// tests never reach the real API by accident.
pub fn run_cli(args: &[&str], cwd: &Path) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_github"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("GITHUB_CLI_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute github binary");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Authenticated client for a mock server
pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(server.uri(), Some(TEST_TOKEN.to_string()))
}

/// Command context for a mock server
pub fn context_for(server: &MockServer) -> CommandContext {
    CommandContext::new(client_for(server))
}
