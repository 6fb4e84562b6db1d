//! Table rendering for command output.

use livraria_app::domain::{
    cart::CartLineItem,
    catalog::Book,
    sales::{Purchase, Sale},
};
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Render a price in the storefront's currency.
pub(crate) fn price(value: Decimal) -> String {
    format!(
        "R$ {:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub(crate) fn books_table(books: &[Book]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["id", "title", "genre", "price", "stock"]);

    for book in books {
        builder.push_record([
            book.id.to_string(),
            book.title.clone(),
            book.genre.clone(),
            price(book.price),
            book.stock.to_string(),
        ]);
    }

    let mut table = builder.build();

    table
        .with(Style::sharp())
        .modify(Columns::new(3..), Alignment::right());

    table.to_string()
}

pub(crate) fn book_details(book: &Book) -> String {
    let mut builder = Builder::default();

    builder.push_record(["id", &book.id.to_string()]);
    builder.push_record(["title", &book.title]);
    builder.push_record(["genre", &book.genre]);
    builder.push_record(["price", &price(book.price)]);
    builder.push_record(["stock", &book.stock.to_string()]);
    builder.push_record(["description", &book.description]);
    builder.push_record(["image", &book.image_url]);

    let mut table = builder.build();

    table.with(Style::sharp());

    table.to_string()
}

pub(crate) fn cart_table(items: &[CartLineItem], total: Decimal) -> String {
    let mut builder = Builder::default();

    builder.push_record(["id", "title", "author", "unit price", "qty", "line total"]);

    for item in items {
        builder.push_record([
            item.book_id.to_string(),
            item.title.clone(),
            item.author.clone(),
            price(item.unit_price),
            item.quantity.to_string(),
            price(item.line_total()),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        "total".to_owned(),
        price(total),
    ]);

    let mut table = builder.build();

    table
        .with(Style::sharp())
        .modify(Columns::new(3..), Alignment::right());

    table.to_string()
}

pub(crate) fn purchases_table(purchases: &[Purchase]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["date", "total", "id"]);

    for purchase in purchases {
        builder.push_record([
            format_date(&purchase.date),
            price(purchase.total),
            purchase.id.to_string(),
        ]);
    }

    let mut table = builder.build();

    table
        .with(Style::sharp())
        .modify(Columns::new(1..2), Alignment::right());

    table.to_string()
}

pub(crate) fn sales_table(sales: &[Sale]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["date", "book", "qty", "sale total"]);

    for sale in sales {
        for line in &sale.lines {
            builder.push_record([
                format_date(&line.date),
                line.book_title.clone(),
                line.quantity.to_string(),
                price(line.sale_total),
            ]);
        }
    }

    let mut table = builder.build();

    table
        .with(Style::sharp())
        .modify(Columns::new(2..), Alignment::right());

    table.to_string()
}

fn format_date(date: &jiff::civil::DateTime) -> String {
    date.strftime("%Y-%m-%d %H:%M").to_string()
}
