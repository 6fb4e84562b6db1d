//! Storefront commands.

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;

mod books;
mod cart;
mod my_books;
mod sales;
mod session;

#[derive(Debug, Parser)]
#[command(name = "livraria", about = "Virtual bookstore storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login(session::LoginArgs),
    /// Drop the persisted session token
    Logout,
    /// Browse the public catalog
    Books(books::BooksCommand),
    /// Manage your own published books
    MyBooks(my_books::MyBooksCommand),
    /// Inspect and edit the shopping cart
    Cart(cart::CartCommand),
    /// Buy a single unit of a book directly
    Buy(sales::BuyArgs),
    /// List your purchases and author sales
    Sales,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        self.config.init_logging();

        let app = self.config.context()?;

        match self.command {
            Commands::Login(args) => session::login(&app, args).await,
            Commands::Logout => session::logout(&app).await,
            Commands::Books(command) => books::run(&app, command).await,
            Commands::MyBooks(command) => my_books::run(&app, command).await,
            Commands::Cart(command) => cart::run(&app, command).await,
            Commands::Buy(args) => sales::buy(&app, args).await,
            Commands::Sales => sales::overview(&app).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_login_with_credentials() {
        let cli = Cli::try_parse_from([
            "livraria",
            "login",
            "--email",
            "leitor@livraria.dev",
            "--password",
            "hunter2",
        ]);

        assert!(cli.is_ok(), "expected login to parse, got {cli:?}");
    }

    #[test]
    fn parses_cart_set_with_quantity() {
        let cli = Cli::try_parse_from(["livraria", "cart", "set", "3", "2"]);

        assert!(cli.is_ok(), "expected cart set to parse, got {cli:?}");
    }

    #[test]
    fn parses_my_books_add_with_price() {
        let cli = Cli::try_parse_from([
            "livraria",
            "my-books",
            "add",
            "--title",
            "O Hobbit",
            "--genre",
            "Fantasia",
            "--stock",
            "10",
            "--price",
            "39.90",
        ]);

        assert!(cli.is_ok(), "expected my-books add to parse, got {cli:?}");
    }

    #[test]
    fn rejects_unknown_command() {
        let cli = Cli::try_parse_from(["livraria", "frobnicate"]);

        assert!(cli.is_err(), "unknown commands must not parse");
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "livraria",
            "--api-url",
            "http://livraria.dev:9000",
            "books",
            "list",
        ])
        .expect("books list should parse");

        assert_eq!(cli.config.api_url, "http://livraria.dev:9000");
    }
}
