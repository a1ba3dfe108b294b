use serde::{Deserialize, Serialize};

/// A GitHub user attached to a gist or returned by `/user`.
///
/// Treated as opaque beyond the identifier; equality compares all fields but
/// callers match owners by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<u64>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}
