//! Auth service errors.

use crate::{api::ApiError, session::SessionError};

use thiserror::Error;

/// Errors raised by login and logout.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The backend rejected the credentials.
    #[error("login failed, please check your credentials")]
    InvalidCredentials,

    /// The login request itself failed.
    #[error("authentication request failed")]
    Api(#[source] ApiError),

    /// The issued token could not be persisted.
    #[error("failed to update the persisted session")]
    Session(#[from] SessionError),
}

impl From<ApiError> for AuthServiceError {
    fn from(error: ApiError) -> Self {
        match &error {
            ApiError::Server { status, .. } if status.is_client_error() => {
                Self::InvalidCredentials
            }
            ApiError::Server { .. } | ApiError::Transport(_) => Self::Api(error),
        }
    }
}
