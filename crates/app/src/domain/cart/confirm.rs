//! Removal confirmation capability.

use async_trait::async_trait;
use mockall::automock;

/// Asks the user whether a line item should really leave the cart.
///
/// Injected into the view-model so the cart flow can be driven without
/// a terminal or any other UI.
#[automock]
#[async_trait]
pub trait RemovalConfirmation: Send + Sync {
    /// Returns `true` when the user confirms removing the named book.
    async fn confirm_removal(&self, title: &str) -> bool;
}
