//! Cart wire records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{cart::models::CartLineItem, catalog::models::BookId};

/// Response body of `GET /carrinho`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartSnapshotRecord {
    pub itens: Vec<CartEntryRecord>,
}

/// One `{ livro, carrinho }` pair in the snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CartEntryRecord {
    pub livro: CartBookRecord,
    pub carrinho: CartQuantityRecord,
}

/// Book details embedded in a cart entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CartBookRecord {
    pub id: BookId,
    pub titulo: String,
    // Not every backend revision includes the author in the snapshot.
    #[serde(default)]
    pub autor: String,
    pub preco: Decimal,
    #[serde(default)]
    pub url_imagem: String,
}

/// Quantity held in the cart for one book.
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuantityRecord {
    pub quantidade: u32,
}

/// Request body of `POST /carrinho/adicionar`.
#[derive(Debug, Clone, Serialize)]
pub struct AddItemRecord {
    pub livro_id: BookId,
    pub quantidade: u32,
}

impl From<CartEntryRecord> for CartLineItem {
    fn from(entry: CartEntryRecord) -> Self {
        Self {
            book_id: entry.livro.id,
            title: entry.livro.titulo,
            author: entry.livro.autor,
            unit_price: entry.livro.preco,
            quantity: entry.carrinho.quantidade,
        }
    }
}
