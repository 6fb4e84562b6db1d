//! Book catalog browsing and author-facing book management.

pub mod errors;
pub mod models;
pub mod records;
pub mod service;

pub use errors::CatalogServiceError;
pub use models::{AuthorBooksPage, Book, BookId, BookUpdate, NewBook};
pub use service::{CatalogService, HttpCatalogService, MockCatalogService};
