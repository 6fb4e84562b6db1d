//! Authentication against the bookstore backend.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::AuthServiceError;
pub use models::{Credentials, TokenData};
pub use service::{AuthService, HttpAuthService, MockAuthService};
