//! API client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by calls to the bookstore API.
///
/// Two failure classes exist: the request never produced a response
/// (transport), or the server answered with a non-success status,
/// optionally carrying a `detail` message in the body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, or timeout failure before any response arrived.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Server {
        /// HTTP status of the response.
        status: StatusCode,
        /// Server-supplied `detail` message, when the body carried one.
        detail: Option<String>,
    },
}

impl ApiError {
    /// The server's `detail` message, when one was returned.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            Self::Transport(_) => None,
        }
    }

    /// Whether the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
