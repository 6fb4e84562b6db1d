//! Author-facing book management.

use clap::{Args, Subcommand};
use livraria_app::{
    context::AppContext,
    domain::catalog::{BookId, NewBook},
};
use rust_decimal::Decimal;

use crate::{output, prompt};

#[derive(Debug, Args)]
pub(crate) struct MyBooksCommand {
    #[command(subcommand)]
    command: MyBooksSubcommand,
}

#[derive(Debug, Subcommand)]
enum MyBooksSubcommand {
    /// List one page of your published books
    List(ListArgs),
    /// Publish a new book
    Add(BookArgs),
    /// Replace an existing book's details
    Update {
        /// Catalog book id
        id: i64,

        #[command(flatten)]
        book: BookArgs,
    },
    /// Delete a published book
    Remove {
        /// Catalog book id
        id: i64,

        /// Delete without asking for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Page to fetch, starting at 1
    #[arg(long, default_value = "1")]
    page: u32,

    /// Books per page
    #[arg(long, default_value = "10")]
    per_page: u32,

    /// Filter by title
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Debug, Args)]
struct BookArgs {
    /// Book title
    #[arg(long)]
    title: String,

    /// Book genre
    #[arg(long)]
    genre: String,

    /// Units available for sale
    #[arg(long)]
    stock: u32,

    /// Unit price, e.g. 39.90
    #[arg(long)]
    price: Decimal,

    /// Book description
    #[arg(long, default_value = "")]
    description: String,

    /// Cover image URL
    #[arg(long, default_value = "")]
    image_url: String,
}

impl From<BookArgs> for NewBook {
    fn from(args: BookArgs) -> Self {
        Self {
            title: args.title,
            genre: args.genre,
            stock: args.stock,
            price: args.price,
            description: args.description,
            image_url: args.image_url,
        }
    }
}

pub(crate) async fn run(app: &AppContext, command: MyBooksCommand) -> Result<(), String> {
    match command.command {
        MyBooksSubcommand::List(args) => {
            let page = app
                .catalog
                .author_books(args.page, args.per_page, &args.search)
                .await
                .map_err(|error| format!("failed to list your books: {error}"))?;

            println!("{}", output::books_table(&page.books));
            println!("page {} of {}", args.page, page.total_pages);
        }
        MyBooksSubcommand::Add(args) => {
            app.catalog
                .create_book(args.into())
                .await
                .map_err(|error| format!("failed to publish book: {error}"))?;

            println!("book published");
        }
        MyBooksSubcommand::Update { id, book } => {
            app.catalog
                .update_book(BookId(id), book.into())
                .await
                .map_err(|error| format!("failed to update book {id}: {error}"))?;

            println!("book {id} updated");
        }
        MyBooksSubcommand::Remove { id, yes } => {
            if !yes && !prompt::confirm(&format!("delete book {id}?")) {
                println!("kept book {id}");
                return Ok(());
            }

            app.catalog
                .delete_book(BookId(id))
                .await
                .map_err(|error| format!("failed to delete book {id}: {error}"))?;

            println!("book {id} deleted");
        }
    }

    Ok(())
}
