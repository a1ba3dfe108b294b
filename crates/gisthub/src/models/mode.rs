//! Listing modes: which gist list a caller wants to page through.

/// Which source the discover listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoverGistsMode {
    All,
    Forked,
    Starred,
}

/// A listing intent, mapped by [`crate::lists::GistListFetcher`] to exactly
/// one repository operation.
///
/// Modes are pure, immutable descriptors: they own no state beyond their
/// parameters. The page cursor lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GistListsMode {
    /// The authenticated user's own gists.
    CurrentUserGists,
    /// Gists starred by `user_name`, or by the authenticated user when absent.
    UserStarredGists { user_name: Option<String> },
    /// Public gists of a specific user.
    UserGists { user_name: String },
    /// Full-text gist search.
    Search { query: String },
    /// Public discovery feeds.
    Discover { mode: DiscoverGistsMode },
}
