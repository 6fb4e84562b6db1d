//! Auth models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login credentials.
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password. Sent as `senha` on the wire.
    #[serde(rename = "senha")]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Token issued by the backend on a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    /// The bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}
