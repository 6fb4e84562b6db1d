//! Catalog service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors raised by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The book does not exist (or is not visible to this user).
    #[error("book not found")]
    NotFound,

    /// The catalog request failed.
    #[error("catalog request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for CatalogServiceError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            Self::NotFound
        } else {
            Self::Api(error)
        }
    }
}
