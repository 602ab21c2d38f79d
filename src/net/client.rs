//! Authenticated HTTP request helper.
//!
//! DESIGN
//! ======
//! `ApiClient` owns the cross-cutting request concerns: resolving endpoints
//! against the configured base URL, attaching the JSON content type and the
//! bearer token when one is held, and letting caller headers win on
//! conflict. It hands back the raw status/body pair untouched; interpreting
//! the status is the caller's job. No retry, no timeout, no automatic 401
//! handling.
//!
//! The transport is abstracted behind [`HttpClient`] so unit tests drive the
//! clients with a scripted fake instead of a browser fetch.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::net::types::ErrorBody;
use crate::state::session::SessionStore;

/// HTTP method of an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully prepared outgoing request.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code plus body text, untouched.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Convert a non-2xx response into a typed error, extracting the
    /// server-supplied message when the body carries one.
    pub fn into_error(&self, fallback: &str) -> ApiError {
        ApiError::Status {
            status: self.status,
            message: ErrorBody::extract(&self.body, fallback),
        }
    }
}

/// Failure taxonomy for remote calls.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: the request never produced an HTTP status.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response with the message extracted from the body.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Transport seam. The browser build uses [`GlooClient`]; tests script a
/// fake implementation. Futures here are `!Send`: everything runs on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Resolve an endpoint against the base URL. Absolute URLs pass through
/// unrewritten; relative paths are prefixed exactly once.
pub fn resolve_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_owned()
    } else if endpoint.starts_with('/') {
        format!("{base_url}{endpoint}")
    } else {
        format!("{base_url}/{endpoint}")
    }
}

/// Merge default headers, the bearer token, and caller headers, in that
/// order. Caller headers replace defaults with the same name
/// (case-insensitive); an empty token attaches no Authorization header.
pub fn merge_headers(token: Option<&str>, caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> =
        vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    for (name, value) in caller {
        match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(existing) => existing.1 = value.clone(),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

/// Authenticated request helper shared by every domain service.
#[derive(Clone)]
pub struct ApiClient<C> {
    http: C,
    config: ApiConfig,
    session: SessionStore,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, config: ApiConfig, session: SessionStore) -> Self {
        Self {
            http,
            config,
            session,
        }
    }

    pub fn session(&self) -> SessionStore {
        self.session
    }

    /// Issue a request with the standard header treatment and return the
    /// raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the transport fails; HTTP error
    /// statuses come back as `Ok` for the caller to interpret.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let token = self.session.token();
        let request = ApiRequest {
            method,
            url: resolve_url(&self.config.base_url, endpoint),
            headers: merge_headers(token.as_deref(), headers),
            body,
        };
        self.http.send(request).await
    }

    /// GET with no body.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Get, endpoint, &[], None).await
    }

    /// Send a JSON payload with the given method.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the payload fails to serialize, or
    /// [`ApiError::Network`] on transport failure.
    pub async fn send_json<T: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &T,
    ) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(method, endpoint, &[], Some(body)).await
    }

    /// DELETE with no body.
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Delete, endpoint, &[], None).await
    }
}

/// Browser transport backed by `gloo-net` fetch. Off-browser (native unit
/// test) builds fail every send so no test accidentally hits the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

impl HttpClient for GlooClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_net::http::RequestBuilder;

            let method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
                Method::Put => gloo_net::http::Method::PUT,
                Method::Patch => gloo_net::http::Method::PATCH,
                Method::Delete => gloo_net::http::Method::DELETE,
            };

            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
            Err(ApiError::Network(
                "HTTP transport requires a browser".to_owned(),
            ))
        }
    }
}
