//! Error types shared by both gist API clients.

use thiserror::Error;

/// Errors that can occur when executing a request against either API base.
///
/// Nothing here is recovered inside the crate: every operation surfaces its
/// error to the caller unchanged. The single status-driven exception is the
/// star check, which folds a 404 into `Ok(false)` at the client layer.
#[derive(Debug, Error)]
pub enum GistHubError {
    /// The request never produced a response (DNS, TLS, timeout, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error ({status}): {}", .body.as_deref().unwrap_or("<no body>"))]
    Http { status: u16, body: Option<String> },

    /// A 2xx response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GistHubError {
    /// Build an HTTP error from a status and a raw response body.
    ///
    /// The body is carried as text when non-empty so structured API error
    /// payloads stay inspectable by the caller.
    pub(crate) fn http(status: u16, body: &[u8]) -> Self {
        let body = if body.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(body).into_owned())
        };
        Self::Http { status, body }
    }

    /// The HTTP status, if this is an HTTP error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for gist API operations.
pub type Result<T> = std::result::Result<T, GistHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_constructor_drops_empty_bodies() {
        let err = GistHubError::http(500, b"");
        match err {
            GistHubError::Http { status, body } => {
                assert_eq!(status, 500);
                assert!(body.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn http_constructor_preserves_error_payloads() {
        let err = GistHubError::http(422, br#"{"message":"Validation Failed"}"#);
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("Validation Failed"));
    }

    #[test]
    fn is_not_found_matches_only_404() {
        assert!(GistHubError::http(404, b"").is_not_found());
        assert!(!GistHubError::http(500, b"").is_not_found());
        assert!(!GistHubError::Transport("reset".to_string()).is_not_found());
    }
}
