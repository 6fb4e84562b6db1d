//! Storefront domain modules, one per backend context.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod sales;
