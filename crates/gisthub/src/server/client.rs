//! Public gists client for the GistHub companion service.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use crate::error::{GistHubError, Result};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::models::{Gist, GistsResponse};
use crate::session::SessionClient;

use super::request::ServerRequest;

/// Default base URL for the public GistHub companion service.
pub const GISTHUB_SERVER_URL: &str = "https://gisthub-server.fly.dev";

const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Client for the unauthenticated discovery and search listings.
///
/// Every operation takes an explicit page number starting at 1 and returns a
/// [`GistsResponse`] whose `has_next_page` is inferred from page emptiness.
/// The page cursor belongs to the caller; this client keeps no state.
#[derive(Clone)]
pub struct GistHubServerClient {
    session: SessionClient,
}

impl GistHubServerClient {
    /// Create a client against the default companion service base.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GISTHUB_SERVER_URL)
    }

    /// Create a client against an alternate companion service base.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT)
            .map_err(|e| GistHubError::Transport(e.0))?;
        Ok(Self::with_transport(base_url, Arc::new(transport)))
    }

    /// Create a client with an explicit base URL and transport.
    pub fn with_transport(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            session: SessionClient::new(base_url, transport),
        }
    }

    async fn fetch_page(&self, request: ServerRequest) -> Result<GistsResponse> {
        let gists: Vec<Gist> = self.session.execute(&request).await?;
        Ok(GistsResponse::new(gists))
    }

    /// Get gists starred by `user_name`.
    pub async fn starred_gists(&self, user_name: &str, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::StarredGists {
            user_name: user_name.to_string(),
            page,
        })
        .await
    }

    /// Get public gists of `user_name`.
    pub async fn user_gists(&self, user_name: &str, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::UserGists {
            user_name: user_name.to_string(),
            page,
        })
        .await
    }

    /// Get the discovery feed.
    pub async fn discover_gists(&self, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::DiscoverGists { page }).await
    }

    /// Get the discovery feed restricted to starred gists.
    pub async fn discover_starred_gists(&self, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::DiscoverStarredGists { page })
            .await
    }

    /// Get the discovery feed restricted to forked gists.
    pub async fn discover_forked_gists(&self, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::DiscoverForkedGists { page })
            .await
    }

    /// Search public gists.
    pub async fn search(&self, query: &str, page: u32) -> Result<GistsResponse> {
        self.fetch_page(ServerRequest::Search {
            query: query.to_string(),
            page,
        })
        .await
    }
}
