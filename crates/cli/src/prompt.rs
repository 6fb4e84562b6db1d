//! Terminal confirmation prompts.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use livraria_app::domain::cart::RemovalConfirmation;

/// Ask a yes/no question on the controlling terminal. Anything other
/// than an explicit yes answers no.
pub(crate) fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");

    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();

    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Removal confirmation that asks on the controlling terminal.
#[derive(Debug)]
pub(crate) struct StdinConfirmation;

#[async_trait]
impl RemovalConfirmation for StdinConfirmation {
    async fn confirm_removal(&self, title: &str) -> bool {
        confirm(&format!("remove \"{title}\" from the cart?"))
    }
}
