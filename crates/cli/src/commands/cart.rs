//! Shopping cart inspection and editing.

use std::sync::Arc;

use clap::{Args, Subcommand};
use livraria_app::{
    context::AppContext,
    domain::{
        cart::{CartViewModel, QuantityChange},
        catalog::BookId,
    },
};

use crate::{output, prompt::StdinConfirmation};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart contents and total
    Show,
    /// Add units of a book to the cart
    Add {
        /// Catalog book id
        id: i64,

        /// Units to add
        #[arg(default_value = "1")]
        quantity: u32,
    },
    /// Set the quantity of a book already in the cart; 0 removes it
    Set {
        /// Catalog book id
        id: i64,

        /// Target quantity
        quantity: u32,
    },
    /// Remove a book from the cart entirely
    Remove {
        /// Catalog book id
        id: i64,
    },
    /// Purchase the whole cart
    Checkout,
}

pub(crate) async fn run(app: &AppContext, command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show => {
            let cart = loaded_cart(app).await?;

            println!("{}", output::cart_table(cart.items(), cart.total()));
        }
        CartSubcommand::Add { id, quantity } => {
            app.cart
                .add_units(BookId(id), quantity)
                .await
                .map_err(|error| format!("failed to add book {id} to the cart: {error}"))?;

            println!("added {quantity} of book {id} to the cart");
        }
        CartSubcommand::Set { id, quantity } => {
            set_quantity(app, BookId(id), quantity).await?;
        }
        CartSubcommand::Remove { id } => {
            set_quantity(app, BookId(id), 0).await?;
        }
        CartSubcommand::Checkout => {
            let mut cart = loaded_cart(app).await?;

            if cart.is_empty() {
                return Err("the cart is empty".to_owned());
            }

            let total = cart.total();

            cart.checkout().await.map_err(|error| error.to_string())?;

            println!("purchase completed, total {}", output::price(total));
        }
    }

    Ok(())
}

async fn set_quantity(app: &AppContext, book: BookId, quantity: u32) -> Result<(), String> {
    let mut cart = loaded_cart(app).await?;

    let outcome = cart
        .set_quantity(book, quantity)
        .await
        .map_err(|error| error.to_string())?;

    match outcome {
        QuantityChange::Unchanged => println!("book {book} already at quantity {quantity}"),
        QuantityChange::Updated => println!("book {book} set to quantity {quantity}"),
        QuantityChange::Removed => println!("book {book} removed from the cart"),
        QuantityChange::Declined => println!("kept book {book} in the cart"),
    }

    Ok(())
}

async fn loaded_cart(app: &AppContext) -> Result<CartViewModel, String> {
    let mut cart = CartViewModel::new(Arc::clone(&app.cart), Arc::new(StdinConfirmation));

    cart.load().await.map_err(|error| error.to_string())?;

    Ok(cart)
}
