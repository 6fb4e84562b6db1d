//! Cart state and its reconciliation against the remote cart store.

pub mod confirm;
pub mod errors;
pub mod models;
pub mod records;
pub mod store;
pub mod view_model;

pub use confirm::{MockRemovalConfirmation, RemovalConfirmation};
pub use errors::CartError;
pub use models::CartLineItem;
pub use store::{CartStore, HttpCartStore, MockCartStore};
pub use view_model::{CartViewModel, QuantityChange};
