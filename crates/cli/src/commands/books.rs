//! Public catalog browsing.

use clap::{Args, Subcommand};
use livraria_app::{context::AppContext, domain::catalog::BookId};

use crate::output;

#[derive(Debug, Args)]
pub(crate) struct BooksCommand {
    #[command(subcommand)]
    command: BooksSubcommand,
}

#[derive(Debug, Subcommand)]
enum BooksSubcommand {
    /// List every book in the catalog
    List,
    /// Show one book's details
    Show {
        /// Catalog book id
        id: i64,
    },
}

pub(crate) async fn run(app: &AppContext, command: BooksCommand) -> Result<(), String> {
    match command.command {
        BooksSubcommand::List => {
            let books = app
                .catalog
                .list_books()
                .await
                .map_err(|error| format!("failed to list books: {error}"))?;

            println!("{}", output::books_table(&books));
        }
        BooksSubcommand::Show { id } => {
            let book = app
                .catalog
                .get_book(BookId(id))
                .await
                .map_err(|error| format!("failed to fetch book {id}: {error}"))?;

            println!("{}", output::book_details(&book));
        }
    }

    Ok(())
}
