//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught where the call is made and turned into a
//! page-local string with [`ApiError::display_message`]. Nothing is retried
//! and transient and permanent failures are not distinguished.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when a failure carries no usable text of its own.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Errors produced by blog API operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// No session token was stored, so the call was not made.
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// A response body required by the operation was missing or malformed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body, picking up the API's
    /// `message` field when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// Text to show the user. `status_fallback` is used when the API
    /// rejected the request without a message.
    #[must_use]
    pub fn display_message(&self, status_fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Status { message: None, .. } => status_fallback.to_owned(),
            Self::NotAuthenticated => self.to_string(),
            Self::Transport(detail) | Self::Decode(detail) => {
                if detail.trim().is_empty() {
                    GENERIC_ERROR.to_owned()
                } else {
                    detail.clone()
                }
            }
        }
    }
}
