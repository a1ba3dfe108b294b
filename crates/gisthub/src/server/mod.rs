//! Unauthenticated client for the public GistHub companion service.
//!
//! Descriptors live in `request`; `client` executes them through a
//! [`crate::session::SessionClient`] against the companion service base.

mod client;
mod request;

pub use client::{GistHubServerClient, GISTHUB_SERVER_URL};
