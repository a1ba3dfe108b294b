//! Execution of request descriptors against a single API base.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{GistHubError, Result};
use crate::http::{HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// A fully specified remote operation.
///
/// Path, method, headers, and body are pure functions of the descriptor and
/// its parameters; the session contributes only the base URL. Descriptors do
/// not validate their parameters, they format them.
pub trait Request {
    fn path(&self) -> String;

    fn method(&self) -> HttpMethod;

    fn headers(&self) -> HttpHeaders {
        HttpHeaders::new()
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Executes request descriptors against one fixed base URL.
///
/// Each repository client constructs its own session against its own base;
/// the session never chooses between bases. One HTTP request is issued per
/// call: no retry, no caching. Cancelling the future aborts the in-flight
/// request without surfacing a partial result.
#[derive(Clone)]
pub struct SessionClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the request and return the raw response.
    ///
    /// Status interpretation is left to the caller; used by operations whose
    /// result is carried entirely in the status code.
    pub async fn send(&self, request: &dyn Request) -> Result<HttpResponse> {
        let path = request.path();
        let method = request.method();
        let http_request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: request.headers(),
            body: request.body()?.unwrap_or_default(),
        };

        tracing::debug!(method = method.as_str(), path = %path, "sending request");

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(|e| GistHubError::Transport(e.0))?;

        tracing::debug!(
            method = method.as_str(),
            path = %path,
            status = response.status,
            "received response"
        );

        Ok(response)
    }

    /// Execute the request and decode the JSON response body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: &dyn Request) -> Result<T> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(GistHubError::http(response.status, &response.body));
        }
        serde_json::from_slice(&response.body).map_err(GistHubError::Decode)
    }

    /// Execute a request whose success carries no payload.
    pub async fn execute_empty(&self, request: &dyn Request) -> Result<()> {
        let response = self.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(GistHubError::http(response.status, &response.body))
        }
    }
}
