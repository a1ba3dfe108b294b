//! Mode-driven selection of gist list sources.

use crate::api::GistHubApiClient;
use crate::error::Result;
use crate::models::{DiscoverGistsMode, Gist, GistListsMode, GistsResponse};
use crate::server::GistHubServerClient;

/// Maps a [`GistListsMode`] to exactly one repository operation.
///
/// The dispatch is pure and total: every mode resolves to one operation with
/// no fallthrough. The page cursor is owned by the caller, and concurrent
/// fetches for the same cursor are not deduplicated here; callers that can
/// trigger duplicates (e.g. fast repeated UI events) must serialize them.
#[derive(Clone)]
pub struct GistListFetcher {
    api: GistHubApiClient,
    server: GistHubServerClient,
}

impl GistListFetcher {
    /// First page number for every paginated source.
    pub const FIRST_PAGE: u32 = 1;

    pub fn new(api: GistHubApiClient, server: GistHubServerClient) -> Self {
        Self { api, server }
    }

    /// Fetch one page of the listing selected by `mode`.
    ///
    /// Unpaginated sources (the authenticated full listings) return their
    /// whole result as a single terminal page, so the caller's
    /// increment-until-exhausted loop terminates after one fetch.
    pub async fn fetch(&self, mode: &GistListsMode, page: u32) -> Result<GistsResponse> {
        match mode {
            GistListsMode::CurrentUserGists => {
                Ok(GistsResponse::complete(self.api.gists().await?))
            }
            GistListsMode::UserStarredGists {
                user_name: Some(user_name),
            } => self.server.starred_gists(user_name, page).await,
            GistListsMode::UserStarredGists { user_name: None } => {
                Ok(GistsResponse::complete(self.api.starred_gists().await?))
            }
            GistListsMode::UserGists { user_name } => {
                self.server.user_gists(user_name, page).await
            }
            GistListsMode::Search { query } => self.server.search(query, page).await,
            GistListsMode::Discover { mode } => match mode {
                DiscoverGistsMode::All => self.server.discover_gists(page).await,
                DiscoverGistsMode::Forked => self.server.discover_forked_gists(page).await,
                DiscoverGistsMode::Starred => self.server.discover_starred_gists(page).await,
            },
        }
    }

    /// Drain every page of `mode` into one list.
    pub async fn fetch_all(&self, mode: &GistListsMode) -> Result<Vec<Gist>> {
        let mut all = Vec::new();
        let mut page = Self::FIRST_PAGE;

        loop {
            let response = self.fetch(mode, page).await?;
            all.extend(response.gists);

            if !response.has_next_page {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}
