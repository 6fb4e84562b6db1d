//! Livraria client library.
//!
//! Shared domain and HTTP modules for the virtual bookstore storefront:
//! a typed API client, session/token lifecycle, and per-screen services
//! for authentication, the catalog, the cart, and sales.

pub mod api;
pub mod context;
pub mod domain;
pub mod session;
