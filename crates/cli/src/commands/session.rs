//! Login and logout.

use clap::Args;
use livraria_app::{context::AppContext, domain::auth::Credentials};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "LIVRARIA_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn login(app: &AppContext, args: LoginArgs) -> Result<(), String> {
    app.auth
        .login(Credentials {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    println!("logged in");

    Ok(())
}

pub(crate) async fn logout(app: &AppContext) -> Result<(), String> {
    app.auth
        .logout()
        .await
        .map_err(|error| format!("logout failed: {error}"))?;

    println!("logged out");

    Ok(())
}
