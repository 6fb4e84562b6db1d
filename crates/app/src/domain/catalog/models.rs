//! Catalog models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub genre: String,
    /// Units available for sale.
    pub stock: u32,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
}

/// Payload for publishing a new book.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub genre: String,
    pub stock: u32,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
}

/// Full-record edit of an existing book; the backend replaces every
/// field, so the payload is the same shape as a new book.
pub type BookUpdate = NewBook;

/// One page of an author's published books.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorBooksPage {
    pub books: Vec<Book>,
    pub total_pages: u32,
}
