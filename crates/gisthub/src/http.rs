//! HTTP transport seam shared by both API clients.
//!
//! Everything above this module speaks in terms of [`HttpRequest`] and
//! [`HttpResponse`]; the only implementation talking to real sockets is
//! [`ReqwestTransport`]. Unit tests substitute [`MockTransport`] instead of
//! standing up loopback servers.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// The request methods the gist APIs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Header pairs in insertion order; lookups are case-insensitive.
pub type HttpHeaders = Vec<(String, String)>;

fn find_header<'a>(headers: &'a HttpHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// One outgoing request, fully resolved: absolute URL, headers, raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// First header value matching `name`, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// One response as received: status, headers, raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First header value matching `name`, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all (DNS, TLS, timeout, reset).
#[derive(Debug, Error)]
#[error("http transport error: {0}")]
pub struct HttpError(pub String);

/// Boundary trait for HTTP I/O.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// `User-Agent` sent with every request; GitHub rejects UA-less requests.
pub const USER_AGENT: &str = concat!("gisthub/", env!("CARGO_PKG_VERSION"));

/// Real transport backed by reqwest.
///
/// Dropping the future returned by [`HttpTransport::send`] aborts the
/// in-flight request; no partial response escapes.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport whose every request times out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map(Self::new)
            .map_err(|e| HttpError(e.to_string()))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
pub use mock::MockTransport;

#[cfg(test)]
mod mock {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// In-memory transport for unit tests.
    ///
    /// Responses are registered per `(method, url)` and served FIFO within a
    /// key; sending to an unregistered key fails like a dead connection.
    /// Every request is recorded for later assertion.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        state: Arc<Mutex<State>>,
    }

    #[derive(Default)]
    struct State {
        routes: Vec<(HttpMethod, String, VecDeque<HttpResponse>)>,
        sent: Vec<HttpRequest>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
            let mut state = self.state.lock().expect("mock state lock");
            f(&mut state)
        }

        fn enqueue(&self, method: HttpMethod, url: String, response: HttpResponse) {
            self.with_state(|state| {
                if let Some((_, _, queue)) = state
                    .routes
                    .iter_mut()
                    .find(|(m, u, _)| *m == method && *u == url)
                {
                    queue.push_back(response);
                } else {
                    state.routes.push((method, url, VecDeque::from([response])));
                }
            });
        }

        /// Register a JSON body served with the given status.
        pub fn push_json(
            &self,
            method: HttpMethod,
            url: impl Into<String>,
            status: u16,
            json: &str,
        ) {
            self.enqueue(
                method,
                url.into(),
                HttpResponse {
                    status,
                    headers: vec![("Content-Type".into(), "application/json".into())],
                    body: json.as_bytes().to_vec(),
                },
            );
        }

        /// Register a bodiless response with the given status.
        pub fn push_status(&self, method: HttpMethod, url: impl Into<String>, status: u16) {
            self.enqueue(
                method,
                url.into(),
                HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: Vec::new(),
                },
            );
        }

        /// Every request sent through this transport, in order.
        #[must_use]
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.with_state(|state| state.sent.clone())
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.with_state(|state| {
                let method = request.method;
                let url = request.url.clone();
                state.sent.push(request);

                state
                    .routes
                    .iter_mut()
                    .find(|(m, u, _)| *m == method && *u == url)
                    .and_then(|(_, _, queue)| queue.pop_front())
                    .ok_or_else(|| {
                        HttpError(format!("no mock response for {} {url}", method.as_str()))
                    })
            })
        }
    }
}
