//! HTTP client for the bookstore REST API.

mod client;
mod errors;

pub use client::ApiClient;
pub use errors::ApiError;
