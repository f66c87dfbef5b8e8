//! GitHub API client and repository metadata adapter.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Wire records decoded from API responses
//! - [`client`] - Client creation and raw GET plumbing
//! - [`repo`] - The per-repository metadata accessors
//!
//! # Example
//!
//! ```ignore
//! use repometa::github::{GitHubClient, GitHubRepo};
//! use repometa::RepoReference;
//!
//! let reference = RepoReference::parse("https://github.com/acme/widget")?;
//! let client = GitHubClient::new(Some(token))?;
//! let repo = GitHubRepo::resolve(client, reference).await?;
//! println!("{:?}", repo.license().await?);
//! ```

mod client;
mod error;
mod repo;
mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use repo::GitHubRepo;
pub use types::{Commit, CommitRef, LicenseContent, Release, RepoInfo, Tag, Topics};
