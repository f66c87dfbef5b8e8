//! The per-repository metadata accessors.

use std::collections::BTreeMap;

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::{Commit, LicenseContent, Release, RepoInfo, Tag, Topics};
use crate::languages::dominant_languages;
use crate::reference::RepoReference;
use crate::tags::{alphanumeric_cmp, is_release_tag};
use crate::types::{Activity, License};

/// Tag pages are fetched 100 at a time until a short page.
const TAG_PAGE_SIZE: usize = 100;

/// Repository metadata adapter for one GitHub repository.
///
/// Wraps a resolved repository handle and exposes read-only accessors that
/// each perform one or two API calls. Every accessor re-fetches on each
/// call; results are idempotent reads but not transactional across calls
/// (tags can change between two invocations).
pub struct GitHubRepo {
    client: GitHubClient,
    reference: RepoReference,
    info: RepoInfo,
}

impl GitHubRepo {
    /// Resolve a reference against the API and retain the repository handle.
    pub async fn resolve(
        client: GitHubClient,
        reference: RepoReference,
    ) -> Result<Self, GitHubError> {
        let info: RepoInfo = client.get(&format!("/repos/{}", reference.path())).await?;
        tracing::debug!("resolved repository {}", info.full_name);
        Ok(Self {
            client,
            reference,
            info,
        })
    }

    /// The reference this adapter was constructed from.
    pub fn reference(&self) -> &RepoReference {
        &self.reference
    }

    /// The repository's HTML URL as reported by the API.
    pub fn html_url(&self) -> &str {
        &self.info.html_url
    }

    fn path(&self) -> String {
        self.reference.path()
    }

    /// Fetch all tags, page by page.
    async fn tags(&self) -> Result<Vec<Tag>, GitHubError> {
        let mut all_tags = Vec::new();
        let mut page = 1u32;

        loop {
            let route = format!(
                "/repos/{}/tags?per_page={}&page={}",
                self.path(),
                TAG_PAGE_SIZE,
                page
            );
            let tags: Vec<Tag> = self.client.get(&route).await?;
            let count = tags.len();
            all_tags.extend(tags);

            if count < TAG_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(all_tags)
    }

    /// Tags that follow the release naming convention, newest first.
    ///
    /// Sorted by natural/alphanumeric order descending, which matches the
    /// service's default newest-first tag ordering, so position 0 is the
    /// most recent release tag and the last position the oldest.
    pub async fn release_tags(&self) -> Result<Vec<Tag>, GitHubError> {
        let mut tags: Vec<Tag> = self
            .tags()
            .await?
            .into_iter()
            .filter(|tag| is_release_tag(&tag.name))
            .collect();
        tags.sort_by(|a, b| alphanumeric_cmp(&b.name, &a.name));
        Ok(tags)
    }

    /// The release tag at `index`, counting from the newest.
    pub async fn release_tag(&self, index: usize) -> Result<Tag, GitHubError> {
        let tags = self.release_tags().await?;
        let len = tags.len();
        tags.into_iter()
            .nth(index)
            .ok_or(GitHubError::OutOfRange { index, len })
    }

    /// Activity for the release tag at `index`.
    pub async fn tag_activity(&self, index: usize) -> Result<Activity, GitHubError> {
        let tag = self.release_tag(index).await?;
        self.activity_for_tag(&tag).await
    }

    /// Build an [`Activity`] pointing at a tag's release page.
    ///
    /// The commit metadata embedded in the tag listing carries unreliable
    /// timestamps, so the commit is always re-fetched by SHA.
    async fn activity_for_tag(&self, tag: &Tag) -> Result<Activity, GitHubError> {
        let commit: Commit = self
            .client
            .get(&format!("/repos/{}/commits/{}", self.path(), tag.commit.sha))
            .await?;

        Ok(Activity {
            date: commit.commit.committer.date.date_naive(),
            url: format!("{}/releases/tag/{}", self.info.html_url, tag.name),
        })
    }

    /// First entry of the releases list, if any (the service orders the
    /// list newest-first, so one element is enough).
    async fn first_listed_release(&self) -> Result<Option<Release>, GitHubError> {
        let releases: Vec<Release> = self
            .client
            .get(&format!("/repos/{}/releases?per_page=1", self.path()))
            .await?;
        Ok(releases.into_iter().next())
    }

    /// The most recent release, or `None` when the repository has neither
    /// releases nor release tags.
    ///
    /// Some projects only surface their releases as tags, so an empty
    /// releases list falls back to the newest release tag.
    pub async fn latest_release(&self) -> Result<Option<Activity>, GitHubError> {
        if let Some(release) = self.first_listed_release().await? {
            return Ok(Some(Activity {
                date: release.created_at.date_naive(),
                url: release.html_url,
            }));
        }

        let tags = self.release_tags().await?;
        match tags.first() {
            Some(tag) => self.activity_for_tag(tag).await.map(Some),
            None => Ok(None),
        }
    }

    /// Approximation of the repository's earliest release activity.
    ///
    /// Mirrors [`Self::latest_release`]: the releases branch reads the same
    /// first list entry, while the tag fallback uses the oldest release tag.
    /// Same optional-return contract.
    pub async fn first_release(&self) -> Result<Option<Activity>, GitHubError> {
        if let Some(release) = self.first_listed_release().await? {
            return Ok(Some(Activity {
                date: release.created_at.date_naive(),
                url: release.html_url,
            }));
        }

        let tags = self.release_tags().await?;
        match tags.last() {
            Some(tag) => self.activity_for_tag(tag).await.map(Some),
            None => Ok(None),
        }
    }

    /// The detected license, or `None` when the service reports none.
    pub async fn license(&self) -> Result<Option<License>, GitHubError> {
        let content: Option<LicenseContent> = self
            .client
            .get_optional(&format!("/repos/{}/license", self.path()))
            .await?;

        Ok(content.map(|content| License {
            name: content.license.name,
            url: content.html_url,
        }))
    }

    /// Activity of the most recent commit.
    ///
    /// A repository with zero commits is an error, not an absence.
    pub async fn last_activity(&self) -> Result<Activity, GitHubError> {
        let commits: Vec<Commit> = self
            .client
            .get(&format!("/repos/{}/commits?per_page=1", self.path()))
            .await?;

        let commit = commits
            .into_iter()
            .next()
            .ok_or(GitHubError::OutOfRange { index: 0, len: 0 })?;

        Ok(Activity {
            date: commit.commit.committer.date.date_naive(),
            url: commit.html_url,
        })
    }

    /// The dominant languages: minimal descending-volume prefix whose
    /// cumulative share strictly exceeds 80% of the total code volume.
    pub async fn languages(&self) -> Result<Vec<String>, GitHubError> {
        let breakdown: BTreeMap<String, u64> = self
            .client
            .get(&format!("/repos/{}/languages", self.path()))
            .await?;
        Ok(dominant_languages(&breakdown))
    }

    /// Topic labels, verbatim in service order.
    pub async fn topics(&self) -> Result<Vec<String>, GitHubError> {
        let topics: Topics = self
            .client
            .get(&format!("/repos/{}/topics", self.path()))
            .await?;
        Ok(topics.names)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::client::API_BASE;
    use super::*;
    use crate::http::{HttpResponse, MockTransport};

    const REPO_JSON: &str = r#"{
        "full_name": "acme/widget",
        "html_url": "https://github.com/acme/widget"
    }"#;

    fn json_ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    fn not_found() -> HttpResponse {
        HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: b"{\"message\": \"Not Found\"}".to_vec(),
        }
    }

    fn api(path: &str) -> String {
        format!("{API_BASE}{path}")
    }

    fn tag_json(name: &str, sha: &str) -> String {
        format!(r#"{{"name": "{name}", "commit": {{"sha": "{sha}"}}}}"#)
    }

    fn commit_json(sha: &str, date: &str) -> String {
        format!(
            r#"{{
                "sha": "{sha}",
                "html_url": "https://github.com/acme/widget/commit/{sha}",
                "commit": {{"committer": {{"date": "{date}"}}}}
            }}"#
        )
    }

    async fn resolve_repo(transport: &MockTransport) -> GitHubRepo {
        transport.push_response(api("/repos/acme/widget"), json_ok(REPO_JSON));
        let client =
            GitHubClient::with_transport(Arc::new(transport.clone()), Some("token".to_string()));
        let reference = RepoReference::parse("https://github.com/acme/widget").unwrap();
        GitHubRepo::resolve(client, reference)
            .await
            .expect("resolve should succeed")
    }

    fn push_tags(transport: &MockTransport, tags: &[(&str, &str)]) {
        let body: Vec<String> = tags.iter().map(|(name, sha)| tag_json(name, sha)).collect();
        transport.push_response(
            api("/repos/acme/widget/tags?per_page=100&page=1"),
            json_ok(&format!("[{}]", body.join(","))),
        );
    }

    #[tokio::test]
    async fn resolve_targets_the_owner_name_path() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        assert_eq!(repo.html_url(), "https://github.com/acme/widget");
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, api("/repos/acme/widget"));
    }

    #[tokio::test]
    async fn release_tags_are_filtered_and_naturally_sorted_newest_first() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        push_tags(
            &transport,
            &[
                ("v1.2", "sha-a"),
                ("latest", "sha-b"),
                ("v1.10", "sha-c"),
                ("v1.9", "sha-d"),
            ],
        );

        let tags = repo.release_tags().await.unwrap();
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["v1.10", "v1.9", "v1.2"]);
    }

    #[tokio::test]
    async fn release_tag_out_of_range_is_a_typed_error() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        push_tags(&transport, &[("v1.0", "sha-a")]);

        let err = repo.release_tag(3).await.unwrap_err();
        match err {
            GitHubError::OutOfRange { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn tag_activity_refetches_the_commit_by_sha() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        push_tags(&transport, &[("v2.0", "sha-xyz")]);
        transport.push_response(
            api("/repos/acme/widget/commits/sha-xyz"),
            json_ok(&commit_json("sha-xyz", "2023-04-01T12:30:00Z")),
        );

        let activity = repo.tag_activity(0).await.unwrap();
        assert_eq!(activity.date.to_string(), "2023-04-01");
        assert_eq!(activity.url, "https://github.com/acme/widget/releases/tag/v2.0");

        // The embedded tag commit metadata is never trusted: the commit
        // endpoint must have been hit.
        let urls: Vec<String> = transport.requests().iter().map(|r| r.url.clone()).collect();
        assert!(urls.contains(&api("/repos/acme/widget/commits/sha-xyz")));
    }

    #[tokio::test]
    async fn latest_release_reads_the_first_list_entry() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(
            api("/repos/acme/widget/releases?per_page=1"),
            json_ok(
                r#"[{
                    "created_at": "2024-02-10T08:00:00Z",
                    "html_url": "https://github.com/acme/widget/releases/tag/v3.0"
                }]"#,
            ),
        );

        let activity = repo.latest_release().await.unwrap().expect("some activity");
        assert_eq!(activity.date.to_string(), "2024-02-10");
        assert_eq!(activity.url, "https://github.com/acme/widget/releases/tag/v3.0");
    }

    #[tokio::test]
    async fn latest_release_falls_back_to_the_newest_tag() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/releases?per_page=1"), json_ok("[]"));
        push_tags(&transport, &[("v1.0", "sha-old"), ("v1.1", "sha-new")]);
        transport.push_response(
            api("/repos/acme/widget/commits/sha-new"),
            json_ok(&commit_json("sha-new", "2023-06-15T00:00:00Z")),
        );

        let activity = repo.latest_release().await.unwrap().expect("tag fallback");
        assert_eq!(activity.date.to_string(), "2023-06-15");
        assert_eq!(activity.url, "https://github.com/acme/widget/releases/tag/v1.1");
    }

    #[tokio::test]
    async fn latest_release_is_none_when_nothing_exists() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/releases?per_page=1"), json_ok("[]"));
        push_tags(&transport, &[]);

        assert!(repo.latest_release().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn first_release_falls_back_to_the_oldest_tag() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/releases?per_page=1"), json_ok("[]"));
        push_tags(&transport, &[("v1.1", "sha-new"), ("v1.0", "sha-old")]);
        transport.push_response(
            api("/repos/acme/widget/commits/sha-old"),
            json_ok(&commit_json("sha-old", "2021-01-05T00:00:00Z")),
        );

        let activity = repo.first_release().await.unwrap().expect("tag fallback");
        assert_eq!(activity.date.to_string(), "2021-01-05");
        assert_eq!(activity.url, "https://github.com/acme/widget/releases/tag/v1.0");
    }

    #[tokio::test]
    async fn first_release_is_none_when_nothing_exists() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/releases?per_page=1"), json_ok("[]"));
        push_tags(&transport, &[("not-a-release", "sha-a")]);

        assert!(repo.first_release().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn license_maps_the_detected_license() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(
            api("/repos/acme/widget/license"),
            json_ok(
                r#"{
                    "html_url": "https://github.com/acme/widget/blob/main/LICENSE",
                    "license": {"key": "mit", "name": "MIT License"}
                }"#,
            ),
        );

        let license = repo.license().await.unwrap().expect("some license");
        assert_eq!(license.name, "MIT License");
        assert_eq!(license.url, "https://github.com/acme/widget/blob/main/LICENSE");
    }

    #[tokio::test]
    async fn missing_license_is_absence_not_an_error() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/license"), not_found());
        assert!(repo.license().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn last_activity_uses_the_most_recent_commit() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(
            api("/repos/acme/widget/commits?per_page=1"),
            json_ok(&format!("[{}]", commit_json("sha-head", "2024-07-30T18:45:00Z"))),
        );

        let activity = repo.last_activity().await.unwrap();
        assert_eq!(activity.date.to_string(), "2024-07-30");
        assert_eq!(activity.url, "https://github.com/acme/widget/commit/sha-head");
    }

    #[tokio::test]
    async fn last_activity_errors_on_a_repository_with_no_commits() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(api("/repos/acme/widget/commits?per_page=1"), json_ok("[]"));

        let err = repo.last_activity().await.unwrap_err();
        assert!(matches!(err, GitHubError::OutOfRange { index: 0, len: 0 }));
    }

    #[tokio::test]
    async fn languages_apply_the_eighty_percent_threshold() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(
            api("/repos/acme/widget/languages"),
            json_ok(r#"{"A": 80, "B": 15, "C": 5}"#),
        );

        assert_eq!(repo.languages().await.unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn topics_are_returned_verbatim() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        transport.push_response(
            api("/repos/acme/widget/topics"),
            json_ok(r#"{"names": ["metadata", "cli", "github"]}"#),
        );

        assert_eq!(
            repo.topics().await.unwrap(),
            vec!["metadata", "cli", "github"]
        );
    }

    #[tokio::test]
    async fn accessors_are_idempotent_given_unchanged_remote_state() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        for _ in 0..2 {
            transport.push_response(
                api("/repos/acme/widget/topics"),
                json_ok(r#"{"names": ["metadata"]}"#),
            );
        }

        let first = repo.topics().await.unwrap();
        let second = repo.topics().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn tag_listing_follows_pagination_until_a_short_page() {
        let transport = MockTransport::new();
        let repo = resolve_repo(&transport).await;

        let full_page: Vec<String> = (0..100)
            .map(|i| tag_json(&format!("v0.{i}"), &format!("sha-{i}")))
            .collect();
        transport.push_response(
            api("/repos/acme/widget/tags?per_page=100&page=1"),
            json_ok(&format!("[{}]", full_page.join(","))),
        );
        transport.push_response(
            api("/repos/acme/widget/tags?per_page=100&page=2"),
            json_ok(&format!("[{}]", tag_json("v1.0", "sha-final"))),
        );

        let tags = repo.release_tags().await.unwrap();
        assert_eq!(tags.len(), 101);
        assert_eq!(tags[0].name, "v1.0");
    }
}
