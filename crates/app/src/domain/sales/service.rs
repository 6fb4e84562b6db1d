//! Sales service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    domain::{
        catalog::models::BookId,
        sales::{errors::SalesServiceError, models::SalesOverview, records::SalesOverviewRecord},
    },
};

/// Sales operations backed by the bookstore REST API.
#[derive(Debug, Clone)]
pub struct HttpSalesService {
    api: ApiClient,
}

impl HttpSalesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SalesService for HttpSalesService {
    async fn overview(&self) -> Result<SalesOverview, SalesServiceError> {
        let record: SalesOverviewRecord = self.api.get_json("/venda/listar").await?;

        Ok(record.into())
    }

    async fn buy_now(&self, book: BookId) -> Result<(), SalesServiceError> {
        self.api
            .post_empty(&format!("/venda/venda-direta/{book}"))
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Retrieve the authenticated user's purchases and author sales.
    async fn overview(&self) -> Result<SalesOverview, SalesServiceError>;

    /// Buy a single unit of a book directly, bypassing the cart.
    async fn buy_now(&self, book: BookId) -> Result<(), SalesServiceError>;
}
