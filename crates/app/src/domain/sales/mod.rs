//! Purchase history and author sales.

pub mod errors;
pub mod models;
pub mod records;
pub mod service;

pub use errors::SalesServiceError;
pub use models::{Purchase, Sale, SaleLine, SalesOverview};
pub use service::{HttpSalesService, MockSalesService, SalesService};
