//! Immutable value objects decoded from API responses.
//!
//! Everything here is constructed at decode time and never mutated in place;
//! updates are expressed as new requests, not field mutation.

mod comment;
mod gist;
mod mode;
mod response;
mod user;

pub use comment::Comment;
pub use gist::{Gist, GistFile, GistFiles};
pub use mode::{DiscoverGistsMode, GistListsMode};
pub use response::GistsResponse;
pub use user::User;
