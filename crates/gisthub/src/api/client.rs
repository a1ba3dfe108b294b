//! Authenticated gists API client.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use crate::error::{GistHubError, Result};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::models::{Comment, Gist, User};
use crate::session::SessionClient;

use super::request::{AuthorizedRequest, GistHubRequest};

/// Default base URL for the GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Client for gist operations that require an authenticated user.
///
/// The token is supplied by the caller; this client never acquires or
/// refreshes credentials. Operations are independently awaitable and share no
/// mutable state, so concurrent invocations are safe.
#[derive(Clone)]
pub struct GistHubApiClient {
    session: SessionClient,
    token: String,
}

impl GistHubApiClient {
    /// Create a client against the default GitHub API base.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API_URL)
    }

    /// Create a client against an alternate API base (e.g. GitHub Enterprise).
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT)
            .map_err(|e| GistHubError::Transport(e.0))?;
        Ok(Self::with_transport(token, base_url, Arc::new(transport)))
    }

    /// Create a client with an explicit base URL and transport.
    pub fn with_transport(
        token: impl Into<String>,
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            session: SessionClient::new(base_url, transport),
            token: token.into(),
        }
    }

    fn authorized(&self, request: GistHubRequest) -> AuthorizedRequest<'_> {
        AuthorizedRequest {
            token: &self.token,
            request,
        }
    }

    /// List gists for the authenticated user.
    pub async fn gists(&self) -> Result<Vec<Gist>> {
        self.session.execute(&self.authorized(GistHubRequest::Gists)).await
    }

    /// List the authenticated user's starred gists.
    pub async fn starred_gists(&self) -> Result<Vec<Gist>> {
        self.session
            .execute(&self.authorized(GistHubRequest::StarredGists))
            .await
    }

    /// Get the authenticated user.
    pub async fn user(&self) -> Result<User> {
        self.session.execute(&self.authorized(GistHubRequest::User)).await
    }

    /// Star a gist.
    pub async fn star_gist(&self, gist_id: &str) -> Result<()> {
        self.session
            .execute_empty(&self.authorized(GistHubRequest::StarGist {
                gist_id: gist_id.to_string(),
            }))
            .await
    }

    /// Unstar a gist.
    pub async fn unstar_gist(&self, gist_id: &str) -> Result<()> {
        self.session
            .execute_empty(&self.authorized(GistHubRequest::UnstarGist {
                gist_id: gist_id.to_string(),
            }))
            .await
    }

    /// Check whether a gist is starred by the authenticated user.
    ///
    /// The API answers with a bare status: 204 when starred, 404 when not.
    /// The 404 is folded into `Ok(false)`; any other non-2xx stays an error.
    pub async fn is_starred(&self, gist_id: &str) -> Result<bool> {
        let request = self.authorized(GistHubRequest::IsStarred {
            gist_id: gist_id.to_string(),
        });
        let response = self.session.send(&request).await?;
        match response.status {
            204 => Ok(true),
            404 => Ok(false),
            status => Err(GistHubError::http(status, &response.body)),
        }
    }

    /// Get a single gist.
    pub async fn gist(&self, gist_id: &str) -> Result<Gist> {
        self.session
            .execute(&self.authorized(GistHubRequest::Gist {
                gist_id: gist_id.to_string(),
            }))
            .await
    }

    /// Update a gist's description and one of its files.
    ///
    /// Exactly one file is touched per call. A `file_name` not present in the
    /// target gist creates that file; passing `None` for `description` leaves
    /// the existing description untouched.
    pub async fn update_gist(
        &self,
        gist_id: &str,
        description: Option<&str>,
        file_name: &str,
        content: &str,
    ) -> Result<Gist> {
        self.session
            .execute(&self.authorized(GistHubRequest::UpdateGist {
                gist_id: gist_id.to_string(),
                description: description.map(str::to_string),
                file_name: file_name.to_string(),
                content: content.to_string(),
            }))
            .await
    }

    /// Delete a gist.
    pub async fn delete_gist(&self, gist_id: &str) -> Result<()> {
        self.session
            .execute_empty(&self.authorized(GistHubRequest::DeleteGist {
                gist_id: gist_id.to_string(),
            }))
            .await
    }

    /// List comments on a gist.
    pub async fn comments(&self, gist_id: &str) -> Result<Vec<Comment>> {
        self.session
            .execute(&self.authorized(GistHubRequest::Comments {
                gist_id: gist_id.to_string(),
            }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, MockTransport};

    const BASE: &str = "https://api.example.test";

    fn client(transport: &MockTransport) -> GistHubApiClient {
        GistHubApiClient::with_transport("t0ken", BASE, Arc::new(transport.clone()))
    }

    #[tokio::test]
    async fn gists_sends_authorized_get_and_decodes_the_list() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/gists"),
            200,
            r#"[{"id": "a"}, {"id": "b"}]"#,
        );

        let gists = client(&transport).gists().await.expect("list");
        assert_eq!(gists.len(), 2);
        assert_eq!(gists[0].id, "a");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("authorization"), Some("Bearer t0ken"));
        assert_eq!(
            requests[0].header("accept"),
            Some("application/vnd.github+json")
        );
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn is_starred_translates_204_and_404_but_not_500() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/gists/abc123/star");
        transport.push_status(HttpMethod::Get, url.clone(), 204);
        transport.push_status(HttpMethod::Get, url.clone(), 404);
        transport.push_status(HttpMethod::Get, url, 500);

        let client = client(&transport);
        assert!(client.is_starred("abc123").await.expect("starred"));
        assert!(!client.is_starred("abc123").await.expect("not starred"));

        let err = client.is_starred("abc123").await.expect_err("500 is an error");
        match err {
            GistHubError::Http { status, .. } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn star_and_unstar_use_put_and_delete_on_the_star_path() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/gists/abc123/star");
        transport.push_status(HttpMethod::Put, url.clone(), 204);
        transport.push_status(HttpMethod::Delete, url, 204);

        let client = client(&transport);
        client.star_gist("abc123").await.expect("star");
        client.unstar_gist("abc123").await.expect("unstar");

        let methods: Vec<HttpMethod> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![HttpMethod::Put, HttpMethod::Delete]);
    }

    #[tokio::test]
    async fn star_propagates_http_errors_for_missing_gists() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Put,
            format!("{BASE}/gists/nope/star"),
            404,
            r#"{"message":"Not Found"}"#,
        );

        let err = client(&transport)
            .star_gist("nope")
            .await
            .expect_err("missing gist");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_gist_patches_a_single_file_body() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Patch,
            format!("{BASE}/gists/abc123"),
            200,
            r#"{"id": "abc123", "files": {"a.txt": {"content": "new"}}}"#,
        );

        let gist = client(&transport)
            .update_gist("abc123", Some("updated"), "a.txt", "new")
            .await
            .expect("update");
        assert_eq!(gist.id, "abc123");

        let requests = transport.requests();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["description"], "updated");
        assert_eq!(body["files"]["a.txt"]["content"], "new");
    }

    #[tokio::test]
    async fn delete_gist_issues_a_single_delete() {
        let transport = MockTransport::new();
        transport.push_status(HttpMethod::Delete, format!("{BASE}/gists/abc123"), 204);

        client(&transport).delete_gist("abc123").await.expect("delete");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn comments_decodes_the_comment_list() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/gists/abc123/comments"),
            200,
            r#"[{"id": 1, "body": "first"}, {"id": 2, "body": "second"}]"#,
        );

        let comments = client(&transport).comments("abc123").await.expect("comments");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].body.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn user_decodes_the_authenticated_user() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/user"),
            200,
            r#"{"id": 1, "login": "octocat"}"#,
        );

        let user = client(&transport).user().await.expect("user");
        assert_eq!(user.login.as_deref(), Some("octocat"));
    }
}
