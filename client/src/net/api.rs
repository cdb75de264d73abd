//! REST API helpers for the remote blog service.
//!
//! Request construction and response interpretation are plain functions so
//! they behave identically in the browser, during SSR, and under test; the
//! async operations only add a [`HttpTransport`] round trip on top.
//!
//! ERROR HANDLING
//! ==============
//! Operations return [`ApiError`]; callers turn it into page text. List
//! fetches treat a missing or malformed body as an empty result.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiRequest, HttpTransport, Method};
use super::types::{Blog, BlogListResponse, BlogQuery, BlogUpdate, Credentials, LoginResponse, RegisterRequest};
use crate::state::session::Session;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable naming the API base URL.
pub const BASE_URL_ENV: &str = "BLOG_API_BASE_URL";

/// Shown when a 2xx login response lacks a token or user id.
pub const INVALID_LOGIN_RESPONSE: &str = "Invalid login response";

/// Location of the remote blog API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Normalize `base_url` by trimming whitespace and trailing slashes.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self { base_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    /// Resolve the base URL for this build.
    ///
    /// SSR reads `BLOG_API_BASE_URL` at runtime first. Browser builds only
    /// see the value baked in at compile time.
    #[must_use]
    pub fn from_env() -> Self {
        #[cfg(feature = "ssr")]
        {
            if let Some(url) = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty()) {
                return Self::new(url);
            }
        }
        Self::new(option_env!("BLOG_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /blogs/getBlogsSearch?…` with empty filters omitted.
    #[must_use]
    pub fn search_url(&self, query: &BlogQuery) -> String {
        let qs = form_urlencoded::Serializer::new(String::new()).extend_pairs(query.pairs()).finish();
        format!("{}/blogs/getBlogsSearch?{qs}", self.base_url)
    }

    #[must_use]
    pub fn update_url(&self, blog_id: &str) -> String {
        format!("{}/blogs/updateBlog/{}", self.base_url, urlencoding::encode(blog_id))
    }

    #[must_use]
    pub fn delete_url(&self, blog_id: &str) -> String {
        format!("{}/blogs/{}", self.base_url, urlencoding::encode(blog_id))
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/users/login", self.base_url)
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/users/register", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

#[must_use]
pub fn search_request(config: &ApiConfig, query: &BlogQuery) -> ApiRequest {
    ApiRequest::new(Method::Get, config.search_url(query))
}

/// # Errors
///
/// Fails only if the body cannot be encoded.
pub fn update_request(
    config: &ApiConfig,
    token: &str,
    blog_id: &str,
    update: &BlogUpdate,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Patch, config.update_url(blog_id)).with_authorization(token).with_json(update)
}

#[must_use]
pub fn delete_request(config: &ApiConfig, token: &str, blog_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, config.delete_url(blog_id)).with_authorization(token)
}

/// # Errors
///
/// Fails only if the body cannot be encoded.
pub fn login_request(config: &ApiConfig, credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, config.login_url()).with_json(credentials)
}

/// # Errors
///
/// Fails only if the body cannot be encoded.
pub fn register_request(config: &ApiConfig, request: &RegisterRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, config.register_url()).with_json(request)
}

// =============================================================================
// RESPONSE INTERPRETATION
// =============================================================================

/// Extract `data` from a listing body. Missing or malformed bodies yield an
/// empty list rather than an error; entries that do not decode as a blog are
/// skipped.
#[must_use]
pub fn parse_blog_list(body: &str) -> Vec<Blog> {
    let entries = serde_json::from_str::<BlogListResponse>(body).ok().and_then(|r| r.data).unwrap_or_default();
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Blog>(entry) {
            Ok(blog) => Some(blog),
            Err(e) => {
                log::warn!("skipping undecodable blog entry: {e}");
                None
            }
        })
        .collect()
}

/// Turn a decoded login body into a session, rejecting blank fields.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if either field is missing or empty.
pub fn session_from_login(body: LoginResponse) -> Result<Session, ApiError> {
    let token = body.token.filter(|t| !t.is_empty());
    let user_id = body.user_id.filter(|u| !u.is_empty());
    match (token, user_id) {
        (Some(token), Some(user_id)) => Ok(Session { token, user_id }),
        _ => Err(ApiError::Decode(INVALID_LOGIN_RESPONSE.to_owned())),
    }
}

fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.is_empty()).ok_or(ApiError::NotAuthenticated)
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Fetch the filtered blog list.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn search_blogs<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    query: &BlogQuery,
) -> Result<Vec<Blog>, ApiError> {
    let resp = transport.send(search_request(config, query)).await?.error_for_status()?;
    Ok(parse_blog_list(&resp.body))
}

/// Patch a blog's title, content and category.
///
/// # Errors
///
/// Returns [`ApiError::NotAuthenticated`] without a call when `token` is
/// absent, otherwise transport and status errors.
pub async fn update_blog<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    token: Option<&str>,
    blog_id: &str,
    update: &BlogUpdate,
) -> Result<(), ApiError> {
    let token = require_token(token)?;
    transport.send(update_request(config, token, blog_id, update)?).await?.error_for_status()?;
    Ok(())
}

/// Delete a blog.
///
/// # Errors
///
/// Same as [`update_blog`].
pub async fn delete_blog<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    token: Option<&str>,
    blog_id: &str,
) -> Result<(), ApiError> {
    let token = require_token(token)?;
    transport.send(delete_request(config, token, blog_id)).await?.error_for_status()?;
    Ok(())
}

/// Exchange credentials for a session.
///
/// # Errors
///
/// Returns transport and status errors, or [`ApiError::Decode`] when the
/// success body lacks a token or user id.
pub async fn login<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    credentials: &Credentials,
) -> Result<Session, ApiError> {
    let resp = transport.send(login_request(config, credentials)?).await?.error_for_status()?;
    session_from_login(resp.json()?)
}

/// Create an account.
///
/// # Errors
///
/// Returns transport and status errors.
pub async fn register<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    request: &RegisterRequest,
) -> Result<(), ApiError> {
    transport.send(register_request(config, request)?).await?.error_for_status()?;
    Ok(())
}
