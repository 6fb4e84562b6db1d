//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    domain::auth::{
        errors::AuthServiceError,
        models::{Credentials, TokenData},
    },
    session::AccessToken,
};

/// Authentication backed by the bookstore REST API.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    api: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: Credentials) -> Result<(), AuthServiceError> {
        let token: TokenData = self
            .api
            .post_json_response("/autenticacao/login", &credentials)
            .await?;

        self.api
            .session()
            .set_token(AccessToken::new(token.access_token))?;

        tracing::debug!("session token refreshed");

        Ok(())
    }

    async fn logout(&self) -> Result<(), AuthServiceError> {
        self.api.session().clear()?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a bearer token and persist it in the
    /// session.
    async fn login(&self, credentials: Credentials) -> Result<(), AuthServiceError>;

    /// Drop the session token from memory and persistent storage.
    async fn logout(&self) -> Result<(), AuthServiceError>;
}
