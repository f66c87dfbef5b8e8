//! Repository reference parsing.
//!
//! A [`RepoReference`] pins down exactly one hosted repository from its
//! canonical URL. The GitHub API requires per-repository context, so URLs
//! pointing at an organization root are rejected up front.

use thiserror::Error;
use url::Url;

/// The only hosting service this adapter supports.
pub const GITHUB_HOST: &str = "github.com";

/// Errors for malformed or unsupported repository URLs.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("invalid repository URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("unsupported host {host:?}, only {GITHUB_HOST} is supported")]
    UnsupportedHost { host: String },

    #[error("cannot use API calls for GitHub organizations: {path:?} has no repository segment")]
    OrganizationOnly { path: String },

    #[error("expected an owner/name repository path, got {path:?}")]
    MalformedPath { path: String },
}

/// One hosted repository, identified by its canonical URL.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    url: String,
    owner: String,
    name: String,
}

impl RepoReference {
    /// Parse a repository URL of the form `https://github.com/<owner>/<name>`.
    ///
    /// Trailing slashes are tolerated and stripped. A `www.` host prefix is
    /// tolerated. Anything that does not resolve to exactly an owner and a
    /// repository segment is rejected.
    pub fn parse(input: &str) -> Result<Self, ReferenceError> {
        let parsed = Url::parse(input)?;

        let host = parsed
            .host_str()
            .ok_or_else(|| ReferenceError::MissingHost(input.to_string()))?;
        if normalize_host(host) != GITHUB_HOST {
            return Err(ReferenceError::UnsupportedHost {
                host: host.to_string(),
            });
        }

        let path = parsed.path().trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [owner, name] => Ok(Self {
                url: input.trim_end_matches('/').to_string(),
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            [_owner] => Err(ReferenceError::OrganizationOnly {
                path: path.to_string(),
            }),
            _ => Err(ReferenceError::MalformedPath {
                path: path.to_string(),
            }),
        }
    }

    /// The canonical URL this reference was parsed from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `owner/name` path used in API routes.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}
