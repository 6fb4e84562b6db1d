//! Client configuration module

use std::path::PathBuf;

use clap::Args;
use livraria_app::{context::AppContext, session::FileTokenStore};
use tracing_subscriber::EnvFilter;

/// Livraria storefront client configuration
#[derive(Debug, Clone, Args)]
pub(crate) struct ClientConfig {
    /// Bookstore API base URL
    #[arg(
        long,
        env = "LIVRARIA_API_URL",
        default_value = "http://localhost:9000"
    )]
    pub api_url: String,

    /// Path of the persisted session token
    #[arg(long, env = "LIVRARIA_TOKEN_FILE", default_value = ".livraria-token")]
    pub token_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl ClientConfig {
    /// Initialize logging; diagnostics go to stderr so table output
    /// stays pipeable.
    pub(crate) fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&self.log_level)),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    /// Build the application context from this configuration.
    pub(crate) fn context(&self) -> Result<AppContext, String> {
        let store = FileTokenStore::new(self.token_file.clone());

        AppContext::from_base_url(&self.api_url, Box::new(store))
            .map_err(|error| format!("failed to initialize client: {error}"))
    }
}
