//! Request descriptors for the authenticated GitHub REST API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::http::{HttpHeaders, HttpMethod};
use crate::session::Request;

/// GitHub's versioned media type for REST responses.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// One case per authenticated remote operation.
///
/// Path, method, and body are pure functions of the case and its parameters;
/// no case validates its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GistHubRequest {
    /// List gists for the authenticated user.
    Gists,
    /// List the authenticated user's starred gists.
    StarredGists,
    /// Get the authenticated user.
    User,
    /// Star a gist.
    StarGist { gist_id: String },
    /// Unstar a gist.
    UnstarGist { gist_id: String },
    /// Check if a gist is starred; the answer is carried by the status code.
    IsStarred { gist_id: String },
    /// Get a single gist.
    Gist { gist_id: String },
    /// Update a gist's description and one of its files.
    UpdateGist {
        gist_id: String,
        description: Option<String>,
        file_name: String,
        content: String,
    },
    /// Delete a gist.
    DeleteGist { gist_id: String },
    /// List comments on a gist.
    Comments { gist_id: String },
}

impl GistHubRequest {
    fn path(&self) -> String {
        match self {
            Self::Gists => "/gists".to_string(),
            Self::StarredGists => "/gists/starred".to_string(),
            Self::User => "/user".to_string(),
            Self::StarGist { gist_id }
            | Self::UnstarGist { gist_id }
            | Self::IsStarred { gist_id } => format!("/gists/{gist_id}/star"),
            Self::Gist { gist_id }
            | Self::DeleteGist { gist_id }
            | Self::UpdateGist { gist_id, .. } => format!("/gists/{gist_id}"),
            Self::Comments { gist_id } => format!("/gists/{gist_id}/comments"),
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            Self::Gists
            | Self::StarredGists
            | Self::User
            | Self::IsStarred { .. }
            | Self::Gist { .. }
            | Self::Comments { .. } => HttpMethod::Get,
            Self::StarGist { .. } => HttpMethod::Put,
            Self::UpdateGist { .. } => HttpMethod::Patch,
            Self::UnstarGist { .. } | Self::DeleteGist { .. } => HttpMethod::Delete,
        }
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        match self {
            Self::UpdateGist {
                description,
                file_name,
                content,
                ..
            } => {
                #[derive(Serialize)]
                struct FileValue<'a> {
                    content: &'a str,
                }

                #[derive(Serialize)]
                struct UpdateBody<'a> {
                    #[serde(skip_serializing_if = "Option::is_none")]
                    description: Option<&'a str>,
                    files: BTreeMap<&'a str, FileValue<'a>>,
                }

                let mut files = BTreeMap::new();
                files.insert(
                    file_name.as_str(),
                    FileValue {
                        content: content.as_str(),
                    },
                );
                let body = UpdateBody {
                    description: description.as_deref(),
                    files,
                };
                Ok(Some(serde_json::to_vec(&body)?))
            }
            _ => Ok(None),
        }
    }
}

/// A [`GistHubRequest`] paired with the caller-supplied bearer token.
///
/// Every authenticated case carries the same header set: the bearer
/// authorization plus GitHub's versioned `Accept` media type.
pub(crate) struct AuthorizedRequest<'a> {
    pub(crate) token: &'a str,
    pub(crate) request: GistHubRequest,
}

impl Request for AuthorizedRequest<'_> {
    fn path(&self) -> String {
        self.request.path()
    }

    fn method(&self) -> HttpMethod {
        self.request.method()
    }

    fn headers(&self) -> HttpHeaders {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.token),
            ),
            ("Accept".to_string(), GITHUB_ACCEPT.to_string()),
        ]
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        self.request.body()
    }
}
