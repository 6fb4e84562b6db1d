//! Catalog wire records.
//!
//! Field names mirror the backend's Portuguese JSON schema; the domain
//! models carry the English names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::models::{AuthorBooksPage, Book, BookId, NewBook};

/// Book as returned by the `/livros` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub titulo: String,
    pub genero: String,
    pub quantidade: u32,
    pub preco: Decimal,
    pub descricao: String,
    #[serde(default)]
    pub url_imagem: String,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.titulo,
            genre: record.genero,
            stock: record.quantidade,
            price: record.preco,
            description: record.descricao,
            image_url: record.url_imagem,
        }
    }
}

/// Create/update payload for `POST /livros/cadastrar` and
/// `PUT /livros/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertBookRecord {
    pub titulo: String,
    pub genero: String,
    pub quantidade: u32,
    pub preco: Decimal,
    pub descricao: String,
    pub url_imagem: String,
}

impl From<NewBook> for UpsertBookRecord {
    fn from(book: NewBook) -> Self {
        Self {
            titulo: book.title,
            genero: book.genre,
            quantidade: book.stock,
            preco: book.price,
            descricao: book.description,
            url_imagem: book.image_url,
        }
    }
}

/// Paginated response of `GET /livros/livros-do-autor`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorBooksRecord {
    pub data: Vec<BookRecord>,
    pub total_paginas: u32,
}

impl From<AuthorBooksRecord> for AuthorBooksPage {
    fn from(record: AuthorBooksRecord) -> Self {
        Self {
            books: record.data.into_iter().map(Book::from).collect(),
            total_pages: record.total_paginas,
        }
    }
}
