//! Login, signup and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from submit handlers and only translate the outcome into
//! form feedback and a delayed navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiConfig};
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::state::forms::{LoginForm, SignupForm};
use crate::state::session::SessionStore;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successfully!";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! Redirecting to login...";
pub const LOGIN_FAILED: &str = "failed to login";
pub const SIGNUP_FAILED: &str = "failed to create user";
pub const USER_NOT_FOUND: &str = "User not found";

/// Route shown after logout.
pub const LOGOUT_ROUTE: &str = "/login";

/// A navigation scheduled after a successful submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub delay: Duration,
}

pub const AFTER_LOGIN: Redirect = Redirect { path: "/blog", delay: Duration::from_millis(1000) };
pub const AFTER_SIGNUP: Redirect = Redirect { path: "/login", delay: Duration::from_millis(2000) };

/// Feedback and follow-up navigation for a successful submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitSuccess {
    pub message: &'static str,
    pub redirect: Redirect,
}

/// User-facing text for a failed login. A 404 without a server message
/// means the name is unknown.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 404, message: None } => USER_NOT_FOUND.to_owned(),
        other => other.display_message(LOGIN_FAILED),
    }
}

/// Validate, POST credentials, and persist the returned session.
///
/// The store is written only on success.
///
/// # Errors
///
/// Returns the message to display: a validation message, the server's
/// `message`, or a fallback.
pub async fn submit_login<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    store: &dyn SessionStore,
    form: &LoginForm,
) -> Result<SubmitSuccess, String> {
    let credentials = form.validate().map_err(str::to_owned)?;
    let session = api::login(transport, config, &credentials).await.map_err(|e| {
        log::warn!("login failed: {e}");
        login_error_message(&e)
    })?;
    session.save(store);
    Ok(SubmitSuccess { message: LOGIN_SUCCESS_MESSAGE, redirect: AFTER_LOGIN })
}

/// Validate and POST a registration.
///
/// # Errors
///
/// Returns the message to display.
pub async fn submit_signup<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    form: &SignupForm,
) -> Result<SubmitSuccess, String> {
    let request = form.validate().map_err(str::to_owned)?;
    api::register(transport, config, &request).await.map_err(|e| {
        log::warn!("signup failed: {e}");
        e.display_message(SIGNUP_FAILED)
    })?;
    Ok(SubmitSuccess { message: SIGNUP_SUCCESS_MESSAGE, redirect: AFTER_SIGNUP })
}

/// Run `navigate` to the redirect target once its delay has elapsed.
/// Browser-only; a no-op during SSR.
pub fn navigate_after<F>(redirect: Redirect, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(redirect.delay).await;
        navigate(redirect.path, NavigateOptions::default());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (redirect, navigate);
}
