use serde::{Deserialize, Serialize};

use super::gist::Gist;

/// One page of a gist listing.
///
/// The public API signals end-of-data by returning an empty page rather than
/// an explicit flag, so `has_next_page` is inferred from emptiness at
/// construction time. A non-empty final page therefore costs one extra fetch
/// before the sequence terminates; that behavior is kept for compatibility
/// with the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistsResponse {
    pub gists: Vec<Gist>,
    pub has_next_page: bool,
}

impl GistsResponse {
    /// Build a page, inferring `has_next_page` from emptiness.
    #[must_use]
    pub fn new(gists: Vec<Gist>) -> Self {
        let has_next_page = !gists.is_empty();
        Self {
            gists,
            has_next_page,
        }
    }

    /// Wrap an unpaginated full listing as a single terminal page.
    #[must_use]
    pub fn complete(gists: Vec<Gist>) -> Self {
        Self {
            gists,
            has_next_page: false,
        }
    }
}
