//! Cart view-model.
//!
//! Keeps a local snapshot of cart line items synchronised with the
//! remote cart store under user-driven quantity edits. Every edit runs
//! the same three-phase protocol: apply locally, call the remote store,
//! then commit or roll back to the pre-edit quantity.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::domain::{
    cart::{
        confirm::RemovalConfirmation, errors::CartError, models::CartLineItem, store::CartStore,
    },
    catalog::models::BookId,
};

/// Outcome of a quantity edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The requested quantity equals the current one; nothing happened.
    Unchanged,
    /// The new quantity was committed remotely.
    Updated,
    /// The line item was removed after confirmation.
    Removed,
    /// The user declined removing the item; the cart is untouched.
    Declined,
}

/// Local cached view of the remote cart.
///
/// All operations run on a single logical thread of execution. Edits to
/// the same line item are not sequenced against in-flight requests; the
/// caller is expected to issue them one at a time.
pub struct CartViewModel {
    store: Arc<dyn CartStore>,
    confirm: Arc<dyn RemovalConfirmation>,
    items: Vec<CartLineItem>,
}

impl CartViewModel {
    /// Create an empty view-model over the given remote store and
    /// confirmation capability.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, confirm: Arc<dyn RemovalConfirmation>) -> Self {
        Self {
            store,
            confirm,
            items: Vec::new(),
        }
    }

    /// Current line items, in server order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fetch the cart snapshot and replace local state.
    ///
    /// Overwrites any unsaved local edits. On failure the prior state is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Load`] when the snapshot cannot be fetched.
    pub async fn load(&mut self) -> Result<(), CartError> {
        match self.store.fetch().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "failed to load cart, keeping previous state");
                Err(CartError::Load(error))
            }
        }
    }

    /// Change a line item's quantity, reconciling with the remote store.
    ///
    /// The change is applied locally before the network call and rolled
    /// back exactly if the call fails. A quantity equal to the current
    /// one is a no-op with no network traffic. A quantity of zero
    /// removes the item, after the user confirms; declining leaves the
    /// cart exactly as it was. Requests are never retried.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when `book_id` is not in the
    /// local snapshot, or [`CartError::QuantityUpdate`] when the remote
    /// call fails (local state has been rolled back by then).
    pub async fn set_quantity(
        &mut self,
        book_id: BookId,
        new_quantity: u32,
    ) -> Result<QuantityChange, CartError> {
        let (index, current) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.book_id == book_id)
            .map(|(index, item)| (index, item.quantity))
            .ok_or(CartError::ItemNotFound)?;

        if new_quantity == current {
            return Ok(QuantityChange::Unchanged);
        }

        // Full removal is detected strictly as a requested quantity of
        // zero, never inferred from the size of the delta.
        if new_quantity == 0 {
            return self.remove_item(index, current).await;
        }

        // Phase one: optimistic local apply.
        self.apply_quantity(index, new_quantity);

        // Phase two: the remote call carries the delta, not the target.
        let result = if new_quantity > current {
            self.store.add_units(book_id, new_quantity - current).await
        } else {
            self.store
                .remove_units(book_id, current - new_quantity)
                .await
        };

        // Phase three: commit, or roll back to the pre-edit quantity.
        match result {
            Ok(()) => {
                debug!(%book_id, from = current, to = new_quantity, "quantity committed");
                Ok(QuantityChange::Updated)
            }
            Err(error) => {
                self.apply_quantity(index, current);
                warn!(%book_id, %error, "quantity update failed, rolled back");
                Err(CartError::QuantityUpdate(error))
            }
        }
    }

    /// Sum over all line items of quantity × unit price, rounded to two
    /// decimal places half-up.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .sum::<Decimal>()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Purchase the whole cart.
    ///
    /// On success local state is cleared. On failure it is left
    /// unchanged and the server's `detail` message is surfaced when one
    /// was returned.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Checkout`] when the purchase is rejected.
    pub async fn checkout(&mut self) -> Result<(), CartError> {
        match self.store.checkout().await {
            Ok(()) => {
                debug!(items = self.items.len(), "checkout completed");
                self.items.clear();
                Ok(())
            }
            Err(error) => {
                warn!(%error, "checkout failed");

                let message = error
                    .detail()
                    .map_or_else(|| "purchase could not be completed".to_owned(), str::to_owned);

                Err(CartError::Checkout {
                    message,
                    source: error,
                })
            }
        }
    }

    async fn remove_item(&mut self, index: usize, current: u32) -> Result<QuantityChange, CartError> {
        // Optimistic removal; the item is reinserted at its original
        // position on decline or failure.
        let item = self.items.remove(index);

        if !self.confirm.confirm_removal(&item.title).await {
            self.items.insert(index, item);
            return Ok(QuantityChange::Declined);
        }

        match self.store.remove_units(item.book_id, current).await {
            Ok(()) => {
                debug!(book_id = %item.book_id, "item removed from cart");
                Ok(QuantityChange::Removed)
            }
            Err(error) => {
                warn!(book_id = %item.book_id, %error, "item removal failed, restored");
                self.items.insert(index, item);
                Err(CartError::QuantityUpdate(error))
            }
        }
    }

    fn apply_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }
}

impl std::fmt::Debug for CartViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartViewModel")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use reqwest::StatusCode;
    use testresult::TestResult;

    use crate::{
        api::ApiError,
        domain::cart::{confirm::MockRemovalConfirmation, store::MockCartStore},
    };

    use super::*;

    fn line_item(id: i64, price_cents: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            book_id: BookId(id),
            title: format!("Livro {id}"),
            author: "Autora".to_owned(),
            unit_price: Decimal::new(price_cents, 2),
            quantity,
        }
    }

    fn server_error(detail: Option<&str>) -> ApiError {
        ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.map(str::to_owned),
        }
    }

    fn view(
        store: MockCartStore,
        confirm: MockRemovalConfirmation,
        items: Vec<CartLineItem>,
    ) -> CartViewModel {
        let mut view = CartViewModel::new(Arc::new(store), Arc::new(confirm));
        view.items = items;
        view
    }

    #[tokio::test]
    async fn load_replaces_local_state() -> TestResult {
        let mut store = MockCartStore::new();
        store
            .expect_fetch()
            .times(1)
            .returning(|| Ok(vec![line_item(1, 5990, 2)]));

        let mut view = view(store, MockRemovalConfirmation::new(), vec![]);

        view.load().await?;

        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_state() {
        let mut store = MockCartStore::new();
        store
            .expect_fetch()
            .times(1)
            .returning(|| Err(server_error(None)));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let result = view.load().await;

        assert!(
            matches!(result, Err(CartError::Load(_))),
            "expected Load error, got {result:?}"
        );
        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);
    }

    #[tokio::test]
    async fn equal_quantity_is_a_no_op_with_zero_network_calls() -> TestResult {
        let mut store = MockCartStore::new();
        store.expect_add_units().never();
        store.expect_remove_units().never();

        let mut confirm = MockRemovalConfirmation::new();
        confirm.expect_confirm_removal().never();

        let mut view = view(store, confirm, vec![line_item(1, 5990, 2)]);

        let outcome = view.set_quantity(BookId(1), 2).await?;

        assert_eq!(outcome, QuantityChange::Unchanged);
        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn increase_sends_the_delta_and_commits() -> TestResult {
        let mut store = MockCartStore::new();
        store
            .expect_add_units()
            .with(eq(BookId(1)), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let outcome = view.set_quantity(BookId(1), 5).await?;

        assert_eq!(outcome, QuantityChange::Updated);
        assert_eq!(view.items(), &[line_item(1, 5990, 5)]);

        Ok(())
    }

    #[tokio::test]
    async fn increase_failure_rolls_back_exactly() {
        let mut store = MockCartStore::new();
        store
            .expect_add_units()
            .times(1)
            .returning(|_, _| Err(server_error(None)));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let result = view.set_quantity(BookId(1), 5).await;

        assert!(
            matches!(result, Err(CartError::QuantityUpdate(_))),
            "expected QuantityUpdate, got {result:?}"
        );
        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);
    }

    #[tokio::test]
    async fn partial_decrease_sends_the_delta_without_confirmation() -> TestResult {
        let mut store = MockCartStore::new();
        store
            .expect_remove_units()
            .with(eq(BookId(1)), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut confirm = MockRemovalConfirmation::new();
        confirm.expect_confirm_removal().never();

        let mut view = view(store, confirm, vec![line_item(1, 5990, 5)]);

        let outcome = view.set_quantity(BookId(1), 2).await?;

        assert_eq!(outcome, QuantityChange::Updated);
        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn decrease_failure_rolls_back_exactly() {
        let mut store = MockCartStore::new();
        store
            .expect_remove_units()
            .times(1)
            .returning(|_, _| Err(server_error(None)));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 5)],
        );

        let result = view.set_quantity(BookId(1), 2).await;

        assert!(
            matches!(result, Err(CartError::QuantityUpdate(_))),
            "expected QuantityUpdate, got {result:?}"
        );
        assert_eq!(view.items(), &[line_item(1, 5990, 5)]);
    }

    #[tokio::test]
    async fn confirmed_removal_deletes_the_full_quantity() -> TestResult {
        let mut store = MockCartStore::new();
        store
            .expect_remove_units()
            .with(eq(BookId(1)), eq(4))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut confirm = MockRemovalConfirmation::new();
        confirm
            .expect_confirm_removal()
            .with(eq("Livro 1"))
            .times(1)
            .returning(|_| true);

        let mut view = view(
            store,
            confirm,
            vec![line_item(1, 5990, 4), line_item(2, 3990, 1)],
        );

        let outcome = view.set_quantity(BookId(1), 0).await?;

        assert_eq!(outcome, QuantityChange::Removed);
        assert_eq!(view.items(), &[line_item(2, 3990, 1)]);

        Ok(())
    }

    #[tokio::test]
    async fn declined_removal_restores_item_and_skips_network() -> TestResult {
        let mut store = MockCartStore::new();
        store.expect_remove_units().never();

        let mut confirm = MockRemovalConfirmation::new();
        confirm
            .expect_confirm_removal()
            .times(1)
            .returning(|_| false);

        let mut view = view(
            store,
            confirm,
            vec![line_item(1, 5990, 4), line_item(2, 3990, 1)],
        );

        let outcome = view.set_quantity(BookId(1), 0).await?;

        assert_eq!(outcome, QuantityChange::Declined);
        assert_eq!(
            view.items(),
            &[line_item(1, 5990, 4), line_item(2, 3990, 1)],
            "declined removal must leave the cart exactly as it was"
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_removal_restores_item_at_its_position() {
        let mut store = MockCartStore::new();
        store
            .expect_remove_units()
            .times(1)
            .returning(|_, _| Err(server_error(None)));

        let mut confirm = MockRemovalConfirmation::new();
        confirm.expect_confirm_removal().times(1).returning(|_| true);

        let mut view = view(
            store,
            confirm,
            vec![line_item(1, 5990, 4), line_item(2, 3990, 1)],
        );

        let result = view.set_quantity(BookId(1), 0).await;

        assert!(
            matches!(result, Err(CartError::QuantityUpdate(_))),
            "expected QuantityUpdate, got {result:?}"
        );
        assert_eq!(
            view.items(),
            &[line_item(1, 5990, 4), line_item(2, 3990, 1)]
        );
    }

    #[tokio::test]
    async fn unknown_book_returns_item_not_found() {
        let mut view = view(
            MockCartStore::new(),
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let result = view.set_quantity(BookId(99), 1).await;

        assert!(
            matches!(result, Err(CartError::ItemNotFound)),
            "expected ItemNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn quantities_stay_positive_after_successful_edits() -> TestResult {
        let mut store = MockCartStore::new();
        store.expect_add_units().returning(|_, _| Ok(()));
        store.expect_remove_units().returning(|_, _| Ok(()));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2), line_item(2, 3990, 3)],
        );

        view.set_quantity(BookId(1), 4).await?;
        view.set_quantity(BookId(2), 1).await?;
        view.set_quantity(BookId(1), 1).await?;

        assert!(
            view.items().iter().all(|item| item.quantity >= 1),
            "no line item may hold a zero quantity"
        );

        Ok(())
    }

    #[test]
    fn total_matches_documented_example() {
        let view = view(
            MockCartStore::new(),
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2), line_item(2, 3990, 1)],
        );

        assert_eq!(view.total(), Decimal::new(15970, 2));
    }

    #[test]
    fn total_rounds_half_up() {
        let mut item = line_item(1, 0, 3);
        item.unit_price = Decimal::new(335, 3); // 3 × 0.335 = 1.005

        let view = view(MockCartStore::new(), MockRemovalConfirmation::new(), vec![item]);

        assert_eq!(view.total(), Decimal::new(101, 2));
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        let view = view(MockCartStore::new(), MockRemovalConfirmation::new(), vec![]);

        assert_eq!(view.total(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn checkout_success_clears_all_items() -> TestResult {
        let mut store = MockCartStore::new();
        store.expect_checkout().times(1).returning(|| Ok(()));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        view.checkout().await?;

        assert!(view.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_failure_preserves_items_and_surfaces_detail() {
        let mut store = MockCartStore::new();
        store.expect_checkout().times(1).returning(|| {
            Err(server_error(Some(
                "Quantidade insuficiente do livro O Senhor dos Anéis",
            )))
        });

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let result = view.checkout().await;

        match result {
            Err(CartError::Checkout { message, .. }) => {
                assert_eq!(message, "Quantidade insuficiente do livro O Senhor dos Anéis");
            }
            other => panic!("expected Checkout error, got {other:?}"),
        }

        assert_eq!(view.items(), &[line_item(1, 5990, 2)]);
    }

    #[tokio::test]
    async fn checkout_failure_without_detail_uses_generic_message() {
        let mut store = MockCartStore::new();
        store
            .expect_checkout()
            .times(1)
            .returning(|| Err(server_error(None)));

        let mut view = view(
            store,
            MockRemovalConfirmation::new(),
            vec![line_item(1, 5990, 2)],
        );

        let result = view.checkout().await;

        match result {
            Err(CartError::Checkout { message, .. }) => {
                assert_eq!(message, "purchase could not be completed");
            }
            other => panic!("expected Checkout error, got {other:?}"),
        }
    }
}
