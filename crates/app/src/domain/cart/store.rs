//! Remote cart store.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::{ApiClient, ApiError},
    domain::{
        cart::{
            models::CartLineItem,
            records::{AddItemRecord, CartSnapshotRecord},
        },
        catalog::models::BookId,
    },
};

/// The remote cart endpoints consumed by the view-model.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch the current cart snapshot.
    async fn fetch(&self) -> Result<Vec<CartLineItem>, ApiError>;

    /// Add `quantity` units of a book to the cart.
    async fn add_units(&self, book: BookId, quantity: u32) -> Result<(), ApiError>;

    /// Remove `quantity` units of a book from the cart.
    async fn remove_units(&self, book: BookId, quantity: u32) -> Result<(), ApiError>;

    /// Purchase the whole cart. The server infers the cart from the
    /// authenticated user, so the request carries no body.
    async fn checkout(&self) -> Result<(), ApiError>;
}

/// [`CartStore`] backed by the bookstore REST API.
#[derive(Debug, Clone)]
pub struct HttpCartStore {
    api: ApiClient,
}

impl HttpCartStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CartStore for HttpCartStore {
    async fn fetch(&self) -> Result<Vec<CartLineItem>, ApiError> {
        let snapshot: CartSnapshotRecord = self.api.get_json("/carrinho").await?;

        Ok(snapshot.itens.into_iter().map(CartLineItem::from).collect())
    }

    async fn add_units(&self, book: BookId, quantity: u32) -> Result<(), ApiError> {
        self.api
            .post_json(
                "/carrinho/adicionar",
                &AddItemRecord {
                    livro_id: book,
                    quantidade: quantity,
                },
            )
            .await
    }

    async fn remove_units(&self, book: BookId, quantity: u32) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/carrinho/remover-item/{book}/{quantity}"))
            .await
    }

    async fn checkout(&self) -> Result<(), ApiError> {
        self.api.post_empty("/venda/comprar-do-carrinho/").await
    }
}
