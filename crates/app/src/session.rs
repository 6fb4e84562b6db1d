//! Session and bearer-token persistence.
//!
//! The storefront keeps one token per installation, persisted under a
//! single path. The session owns the token for the lifetime of the
//! process and exposes an explicit load/set/clear lifecycle instead of
//! ambient global storage.

use std::{
    fmt, fs, io,
    path::PathBuf,
    sync::{PoisonError, RwLock},
};

use mockall::automock;
use thiserror::Error;
use zeroize::Zeroize;

/// Bearer token issued by the backend on login.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
}

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self { value }
    }

    /// The raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(**redacted**)")?;
        Ok(())
    }
}

impl Drop for AccessToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Errors raised by token persistence.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the persisted token failed.
    #[error("token storage error")]
    Io(#[from] io::Error),
}

/// Persistent storage for the session token, keyed by a single slot.
#[automock]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be read.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be written.
    fn store(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Delete the persisted token. Deleting an absent token is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be written.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// [`TokenStore`] persisting the token to a file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();

                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, token)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// Errors raised by session lifecycle operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The token store rejected the operation.
    #[error("failed to access persisted session token")]
    Store(#[from] TokenStoreError),
}

/// The authenticated session, owning the in-memory token and its
/// persistent store.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: RwLock<Option<AccessToken>>,
}

impl Session {
    /// Create a session with no token loaded yet.
    #[must_use]
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            token: RwLock::new(None),
        }
    }

    /// Load the persisted token into memory, replacing the current one.
    ///
    /// # Errors
    ///
    /// Returns an error when the token store cannot be read.
    pub fn load(&self) -> Result<(), SessionError> {
        let token = self.store.load()?.map(AccessToken::new);

        *self.guard_mut() = token;

        Ok(())
    }

    /// Persist and adopt a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token store cannot be written; the
    /// in-memory token is left unchanged in that case.
    pub fn set_token(&self, token: AccessToken) -> Result<(), SessionError> {
        self.store.store(token.as_str())?;

        *self.guard_mut() = Some(token);

        Ok(())
    }

    /// Drop the token from memory and persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error when the token store cannot be written.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()?;

        *self.guard_mut() = None;

        Ok(())
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|token| token.as_str().to_owned())
    }

    /// Whether a token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn guard_mut(&self) -> std::sync::RwLockWriteGuard<'_, Option<AccessToken>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
