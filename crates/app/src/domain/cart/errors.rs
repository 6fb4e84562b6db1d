//! Cart errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced by the cart view-model.
///
/// A declined removal confirmation is not an error; it is reported as a
/// [`QuantityChange::Declined`](crate::domain::cart::QuantityChange)
/// outcome instead.
#[derive(Debug, Error)]
pub enum CartError {
    /// The edited book is not in the local cart snapshot.
    #[error("item not found in cart")]
    ItemNotFound,

    /// The cart snapshot could not be fetched.
    #[error("failed to load the cart")]
    Load(#[source] ApiError),

    /// A quantity change was rejected; local state has been rolled back.
    #[error("failed to update the quantity")]
    QuantityUpdate(#[source] ApiError),

    /// Checkout failed; `message` carries the server's `detail` when one
    /// was returned, else a generic text.
    #[error("{message}")]
    Checkout {
        message: String,
        #[source]
        source: ApiError,
    },
}
