//! Sales domain models.

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Everything the sales screen shows: the user's purchases and, for
/// authors, the sales of their own books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesOverview {
    pub purchases: Vec<Purchase>,
    pub sales: Vec<Sale>,
}

/// One completed purchase made by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: Uuid,
    pub total: Decimal,
    pub date: DateTime,
}

/// One sale of the author's books, holding one line per book sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub lines: Vec<SaleLine>,
}

/// One book within a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub sale_id: Uuid,
    pub book_title: String,
    pub quantity: u32,
    pub sale_total: Decimal,
    pub date: DateTime,
}
