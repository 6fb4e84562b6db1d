//! Purchases, author sales, and direct buying.

use clap::Args;
use livraria_app::{context::AppContext, domain::catalog::BookId};

use crate::output;

#[derive(Debug, Args)]
pub(crate) struct BuyArgs {
    /// Catalog book id
    id: i64,
}

pub(crate) async fn buy(app: &AppContext, args: BuyArgs) -> Result<(), String> {
    app.sales
        .buy_now(BookId(args.id))
        .await
        .map_err(|error| format!("purchase failed: {error}"))?;

    println!("bought one unit of book {}", args.id);

    Ok(())
}

pub(crate) async fn overview(app: &AppContext) -> Result<(), String> {
    let overview = app
        .sales
        .overview()
        .await
        .map_err(|error| format!("failed to fetch sales: {error}"))?;

    println!("purchases");
    println!("{}", output::purchases_table(&overview.purchases));
    println!();
    println!("sales of your books");
    println!("{}", output::sales_table(&overview.sales));

    Ok(())
}
