//! ReCircle backend REST client.
//!
//! # Architecture
//!
//! - Every backend call goes through [`ApiClient::send`], one request per
//!   call, no retries
//! - Read-only widget data is fetched with [`ApiClient::load`], which never
//!   fails: any error becomes a [`RemoteResource`](crate::resource::RemoteResource)
//!   holding the demo value from [`fallback`] plus an advisory message
//! - Actions (claim, submit, approve, chat, categorize) return
//!   `Result<_, ApiError>` and each caller decides what a failure means
//!
//! # Example
//!
//! ```rust,ignore
//! use recircle_dashboard::api::ApiClient;
//!
//! let client = ApiClient::new(&config.api)?;
//!
//! // Falls back to demo partners when the backend is down
//! let leaderboard = client.leaderboard().await;
//! if leaderboard.is_fallback() {
//!     tracing::warn!("showing demo leaderboard");
//! }
//! ```

mod client;
pub mod fallback;
pub mod types;

pub use client::{ApiClient, Endpoint, ListingFilter};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the ReCircle backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The endpoint path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status reported by the backend, if it answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing next to the failed action.
    ///
    /// Prefers the backend's own `detail` text over the generic display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Http(e) if e.is_timeout() => "The server took too long to respond".to_string(),
            Self::Http(_) => "Network error occurred".to_string(),
            Self::Parse(_) => "Unexpected response from server".to_string(),
            Self::Url(_) => "Invalid request".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Status {
            status: 400,
            message: "Item is not available".to_string(),
        };
        assert_eq!(err.user_message(), "Item is not available");
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = ApiError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
