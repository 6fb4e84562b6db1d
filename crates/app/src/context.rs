//! App Context

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;

use crate::{
    api::ApiClient,
    domain::{
        auth::{AuthService, HttpAuthService},
        cart::{CartStore, HttpCartStore},
        catalog::{CatalogService, HttpCatalogService},
        sales::{HttpSalesService, SalesService},
    },
    session::{Session, TokenStore},
};

/// Errors raised while wiring the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The configured API base URL does not parse.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL text.
        url: String,
        /// Parser message.
        reason: String,
    },
}

/// Service handles shared by every storefront screen.
#[derive(Clone)]
pub struct AppContext {
    /// The authenticated session.
    pub session: Arc<Session>,
    /// Login and logout.
    pub auth: Arc<dyn AuthService>,
    /// Catalog browsing and author book management.
    pub catalog: Arc<dyn CatalogService>,
    /// Purchase and sales history.
    pub sales: Arc<dyn SalesService>,
    /// Remote cart endpoints, consumed by the cart view-model.
    pub cart: Arc<dyn CartStore>,
}

impl AppContext {
    /// Build the application context from the API base URL and a token
    /// store, loading any persisted session token.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse.
    pub fn from_base_url(base_url: &str, store: Box<dyn TokenStore>) -> Result<Self, AppInitError> {
        let url = Url::parse(base_url).map_err(|error| AppInitError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: error.to_string(),
        })?;

        let session = Arc::new(Session::new(store));

        if let Err(error) = session.load() {
            tracing::warn!(%error, "could not load persisted session token");
        }

        let api = ApiClient::new(url, Arc::clone(&session));

        Ok(Self {
            session,
            auth: Arc::new(HttpAuthService::new(api.clone())),
            catalog: Arc::new(HttpCatalogService::new(api.clone())),
            sales: Arc::new(HttpSalesService::new(api.clone())),
            cart: Arc::new(HttpCartStore::new(api)),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
