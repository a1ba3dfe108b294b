//! Request descriptors for the public GistHub companion service.

use crate::http::{HttpHeaders, HttpMethod};
use crate::session::Request;

/// One case per public listing operation.
///
/// Every case is an unauthenticated `GET` with no headers and no body; page
/// numbering starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ServerRequest {
    /// Gists starred by a user.
    StarredGists { user_name: String, page: u32 },
    /// Public gists of a user.
    UserGists { user_name: String, page: u32 },
    /// The discovery feed.
    DiscoverGists { page: u32 },
    /// Discovery restricted to starred gists.
    DiscoverStarredGists { page: u32 },
    /// Discovery restricted to forked gists.
    DiscoverForkedGists { page: u32 },
    /// Full-text search.
    Search { query: String, page: u32 },
}

impl Request for ServerRequest {
    fn path(&self) -> String {
        match self {
            Self::StarredGists { user_name, page } => {
                format!("/users/{user_name}/starred?page={page}")
            }
            Self::UserGists { user_name, page } => {
                format!("/users/{user_name}/gists?page={page}")
            }
            Self::DiscoverGists { page } => format!("/discover?page={page}"),
            Self::DiscoverStarredGists { page } => format!("/discover/starred?page={page}"),
            Self::DiscoverForkedGists { page } => format!("/discover/forked?page={page}"),
            Self::Search { query, page } => {
                format!("/search?q={}&p={}", urlencoding::encode(query), page)
            }
        }
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> HttpHeaders {
        HttpHeaders::new()
    }
}
