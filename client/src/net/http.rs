//! HTTP round-trip abstraction shared by browser and server builds.
//!
//! Client-side (hydrate): [`FetchTransport`] sends through `gloo-net`.
//! Server-side (SSR): [`ReqwestTransport`] sends through `reqwest`.
//! Tests substitute a recording transport so flows run without a network.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// HTTP verbs used by the blog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A fully-resolved request ready to hand to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Raw token sent verbatim as the `Authorization` header.
    pub authorization: Option<String>,
    /// JSON body; sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), authorization: None, body: None }
    }

    #[must_use]
    pub fn with_authorization(mut self, token: impl Into<String>) -> Self {
        self.authorization = Some(token.into());
        self
    }

    /// Attach `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status and raw body of a completed round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert non-2xx responses into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns the status error, carrying the body's `message` if any.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.body))
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// One request, one response. Implementations never retry.
pub trait HttpTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.authorization {
            builder = builder.header("Authorization", token);
        }
        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await,
            None if request.method == Method::Get => builder.send().await,
            None => builder.header("Content-Type", "application/json").send().await,
        };
        let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

/// Request timeout, in seconds, for server-side calls when none is configured.
#[cfg(feature = "ssr")]
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Connect timeout, in seconds, for server-side calls when none is configured.
#[cfg(feature = "ssr")]
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Server transport backed by a shared `reqwest` client.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl ReqwestTransport {
    /// Build a transport with request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the client cannot be constructed.
    pub fn new(timeout: std::time::Duration, connect_timeout: std::time::Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http })
    }

    /// Build a transport with [`DEFAULT_TIMEOUT_SECS`] and
    /// [`DEFAULT_CONNECT_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Same as [`ReqwestTransport::new`].
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(
            std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            std::time::Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }
}

#[cfg(feature = "ssr")]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, &request.url);
        if let Some(token) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
