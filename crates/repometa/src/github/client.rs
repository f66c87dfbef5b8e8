//! GitHub API client creation and raw GET plumbing.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use serde::de::DeserializeOwned;

use super::error::GitHubError;
use crate::http::{HttpRequest, HttpTransport, ReqwestTransport};

/// Base URL of the GitHub REST API.
pub const API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "repometa";

/// GitHub API client.
///
/// Holds the transport and an optional bearer token. Construct one in the
/// application entry point and pass it to [`super::GitHubRepo::resolve`];
/// there is no module-level client and no environment read at load time.
/// Without a token the client is unauthenticated and subject to GitHub's
/// stricter anonymous rate limits, which are not otherwise handled here.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client backed by a real HTTP transport.
    pub fn new(token: Option<String>) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(StdDuration::from_secs(30))
            .map_err(GitHubError::Http)?;
        Ok(Self::with_transport(Arc::new(transport), token))
    }

    /// Create a client over an explicit transport (injectable for tests).
    pub fn with_transport(transport: Arc<dyn HttpTransport>, token: Option<String>) -> Self {
        Self { transport, token }
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    /// Make a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let request = HttpRequest {
            url: format!("{API_BASE}{path}"),
            headers: self.headers(),
        };

        let response = self.transport.get(request).await?;
        tracing::debug!("GET {} -> {}", path, response.status);

        if !(200..300).contains(&response.status) {
            return Err(GitHubError::Api {
                status: response.status,
                path: path.to_string(),
                message: String::from_utf8_lossy(&response.body).to_string(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| GitHubError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Like [`Self::get`], but maps HTTP 404 to `Ok(None)`.
    ///
    /// Used where the API reports absence as "not found", e.g. the license
    /// endpoint for repositories without a detectable license.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, GitHubError> {
        let request = HttpRequest {
            url: format!("{API_BASE}{path}"),
            headers: self.headers(),
        };

        let response = self.transport.get(request).await?;
        tracing::debug!("GET {} -> {}", path, response.status);

        if response.status == 404 {
            return Ok(None);
        }

        if !(200..300).contains(&response.status) {
            return Err(GitHubError::Api {
                status: response.status,
                path: path.to_string(),
                message: String::from_utf8_lossy(&response.body).to_string(),
            });
        }

        serde_json::from_slice(&response.body)
            .map(Some)
            .map_err(|source| GitHubError::Decode {
                path: path.to_string(),
                source,
            })
    }
}
