//! GistHub - typed request dispatch and pagination for the GitHub Gists API.
//!
//! This library describes every remote gist operation as a declarative
//! request descriptor, executes descriptors through a session abstraction
//! with authentication and content negotiation baked in, decodes responses
//! into a stable in-memory model, and drives cursor-based pagination across
//! the different ways of listing gists.
//!
//! Two independently constructible clients share the descriptor/session
//! machinery:
//!
//! - [`GistHubApiClient`] - authenticated operations against the GitHub REST
//!   API (list, get, star, unstar, update, delete, comments).
//! - [`GistHubServerClient`] - unauthenticated, page-numbered listings from
//!   the public companion service (per-user, discovery, search).
//!
//! [`GistListFetcher`] maps a [`models::GistListsMode`] to the matching
//! operation on one of the two clients.
//!
//! # Example
//!
//! ```ignore
//! use gisthub::{GistHubApiClient, GistHubServerClient, GistListFetcher};
//! use gisthub::models::{DiscoverGistsMode, GistListsMode};
//!
//! let api = GistHubApiClient::new(token)?;
//! let server = GistHubServerClient::new()?;
//! let fetcher = GistListFetcher::new(api, server);
//!
//! let mode = GistListsMode::Discover { mode: DiscoverGistsMode::All };
//! let page = fetcher.fetch(&mode, GistListFetcher::FIRST_PAGE).await?;
//! ```

pub mod api;
pub mod error;
pub mod http;
pub mod lists;
pub mod models;
pub mod server;
pub mod session;

pub use api::{GistHubApiClient, GITHUB_API_URL};
pub use error::{GistHubError, Result};
pub use lists::GistListFetcher;
pub use server::{GistHubServerClient, GISTHUB_SERVER_URL};
pub use session::SessionClient;
