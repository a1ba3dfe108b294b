//! Authenticated GitHub REST API client for gists.
//!
//! Descriptors live in `request`; `client` executes them through a
//! [`crate::session::SessionClient`] against the GitHub REST base.

mod client;
mod request;

pub use client::{GistHubApiClient, GITHUB_API_URL};
