//! Cart models.

use rust_decimal::Decimal;

use crate::domain::catalog::models::BookId;

/// One book entry in the cart with its quantity.
///
/// Uniquely keyed by `book_id` within a cart snapshot. The quantity is
/// always at least one; an item whose quantity reaches zero is removed
/// from the cart instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLineItem {
    /// Line total: quantity × unit price, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_quantity_by_unit_price() {
        let item = CartLineItem {
            book_id: BookId(1),
            title: "O Senhor dos Anéis".to_owned(),
            author: "J.R.R. Tolkien".to_owned(),
            unit_price: Decimal::new(5990, 2),
            quantity: 3,
        };

        assert_eq!(item.line_total(), Decimal::new(17970, 2));
    }
}
