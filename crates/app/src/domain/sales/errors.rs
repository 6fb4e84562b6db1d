//! Sales service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

/// Errors raised by sales operations.
#[derive(Debug, Error)]
pub enum SalesServiceError {
    /// The book targeted by a direct sale does not exist.
    #[error("book not found")]
    BookNotFound,

    /// The server rejected the sale and explained why, typically
    /// insufficient stock.
    #[error("{0}")]
    Rejected(String),

    /// The sales request failed.
    #[error("sales request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for SalesServiceError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            return Self::BookNotFound;
        }

        match error {
            ApiError::Server {
                status,
                detail: Some(detail),
            } if status == StatusCode::BAD_REQUEST => Self::Rejected(detail),
            other => Self::Api(other),
        }
    }
}
