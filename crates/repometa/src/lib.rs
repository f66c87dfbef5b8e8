//! Repometa - repository metadata retrieval from GitHub.
//!
//! This library wraps one hosted repository, identified by its URL, and
//! exposes read-only accessors that map GitHub API responses into a small
//! set of plain domain records ([`Activity`], [`License`], language and
//! topic lists). It papers over the places where GitHub represents
//! overlapping concepts inconsistently, most notably releases vs. tags.
//!
//! # Example
//!
//! ```ignore
//! use repometa::{GitHubClient, GitHubRepo, RepoReference};
//!
//! let reference = RepoReference::parse("https://github.com/rust-lang/rust")?;
//! let client = GitHubClient::new(Some(token))?;
//! let repo = GitHubRepo::resolve(client, reference).await?;
//!
//! let latest = repo.latest_release().await?;
//! let languages = repo.languages().await?;
//! ```

pub mod github;
pub mod http;
pub mod languages;
pub mod reference;
pub mod tags;
pub mod types;

pub use github::{GitHubClient, GitHubError, GitHubRepo};
pub use reference::{ReferenceError, RepoReference};
pub use types::{Activity, License};
