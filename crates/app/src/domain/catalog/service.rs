//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{AuthorBooksPage, Book, BookId, BookUpdate, NewBook},
        records::{AuthorBooksRecord, BookRecord, UpsertBookRecord},
    },
};

/// Catalog operations backed by the bookstore REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    api: ApiClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_books(&self) -> Result<Vec<Book>, CatalogServiceError> {
        let records: Vec<BookRecord> = self.api.get_json("/livros/").await?;

        Ok(records.into_iter().map(Book::from).collect())
    }

    async fn get_book(&self, book: BookId) -> Result<Book, CatalogServiceError> {
        let record: BookRecord = self.api.get_json(&format!("/livros/{book}")).await?;

        Ok(record.into())
    }

    async fn author_books(
        &self,
        page: u32,
        per_page: u32,
        search: &str,
    ) -> Result<AuthorBooksPage, CatalogServiceError> {
        let record: AuthorBooksRecord = self
            .api
            .get_json(&format!(
                "/livros/livros-do-autor?quantidade={per_page}&pagina={page}&busca={search}"
            ))
            .await?;

        Ok(record.into())
    }

    async fn create_book(&self, book: NewBook) -> Result<(), CatalogServiceError> {
        self.api
            .post_json("/livros/cadastrar", &UpsertBookRecord::from(book))
            .await?;

        Ok(())
    }

    async fn update_book(&self, book: BookId, update: BookUpdate) -> Result<(), CatalogServiceError> {
        self.api
            .put_json(&format!("/livros/{book}"), &UpsertBookRecord::from(update))
            .await?;

        Ok(())
    }

    async fn delete_book(&self, book: BookId) -> Result<(), CatalogServiceError> {
        self.api.delete(&format!("/livros/{book}")).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves every book in the public catalog.
    async fn list_books(&self) -> Result<Vec<Book>, CatalogServiceError>;

    /// Retrieve a single book.
    async fn get_book(&self, book: BookId) -> Result<Book, CatalogServiceError>;

    /// Retrieve one page of the authenticated author's books, optionally
    /// filtered by a search term.
    async fn author_books(
        &self,
        page: u32,
        per_page: u32,
        search: &str,
    ) -> Result<AuthorBooksPage, CatalogServiceError>;

    /// Publish a new book under the authenticated author.
    async fn create_book(&self, book: NewBook) -> Result<(), CatalogServiceError>;

    /// Replace an existing book's details.
    async fn update_book(&self, book: BookId, update: BookUpdate) -> Result<(), CatalogServiceError>;

    /// Delete a published book.
    async fn delete_book(&self, book: BookId) -> Result<(), CatalogServiceError>;
}
