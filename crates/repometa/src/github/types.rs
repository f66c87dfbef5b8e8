//! GitHub API wire records.
//!
//! These structs are decoded from API responses and carry only the fields
//! the adapter actually consumes. Required fields missing from a response
//! surface as a decode error at the boundary rather than a panic later.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The resolved repository handle, retained after construction.
///
/// API docs: https://docs.github.com/rest/repos/repos#get-a-repository
#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    /// Full name including owner (e.g., "owner/repo").
    pub full_name: String,
    /// HTML URL to the repository.
    pub html_url: String,
}

/// A tag from the tag listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// Tag name (e.g., "v1.2.3").
    pub name: String,
    /// The commit the tag points at.
    pub commit: CommitRef,
}

/// Commit reference embedded in a tag listing.
///
/// The listing also embeds commit metadata, but its timestamps are
/// unreliable; only the SHA is trusted, and the commit is re-fetched by it.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// A commit fetched by SHA (or from the commit listing).
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    /// HTML URL to the commit page.
    pub html_url: String,
    /// Nested git commit data.
    pub commit: CommitDetail,
}

/// Git-level commit data nested inside the API commit object.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub committer: CommitSignature,
}

/// Committer signature with the timestamp the adapter reads.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub date: DateTime<Utc>,
}

/// A release from the release listing endpoint (ordered newest-first).
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// When the release was created.
    pub created_at: DateTime<Utc>,
    /// HTML URL to the release page.
    pub html_url: String,
}

/// License content response.
///
/// GitHub reports "no license" as a 404 on this endpoint, which the client
/// maps to absence rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseContent {
    /// HTML URL to the license file page.
    pub html_url: String,
    /// The detected license.
    pub license: LicenseInfo,
}

/// Detected license metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseInfo {
    /// Human-readable name (e.g., "MIT License").
    pub name: String,
}

/// Topic labels, verbatim in service order.
#[derive(Debug, Clone, Deserialize)]
pub struct Topics {
    pub names: Vec<String>,
}
