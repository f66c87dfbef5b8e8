//! Shared helpers for command handlers.

use repometa::{GitHubClient, GitHubRepo, RepoReference};

use crate::config::Config;

/// Parse the URL, build a client from the configuration, and resolve the
/// repository handle.
pub(crate) async fn open_repo(
    url: &str,
    config: &Config,
) -> Result<GitHubRepo, Box<dyn std::error::Error>> {
    let reference = RepoReference::parse(url)?;
    let client = GitHubClient::new(config.github.token.clone())?;
    let repo = GitHubRepo::resolve(client, reference).await?;
    Ok(repo)
}
