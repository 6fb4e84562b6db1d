//! Livraria storefront CLI

use std::process;

use clap::Parser;

use crate::commands::Cli;

mod commands;
mod config;
mod output;
mod prompt;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
