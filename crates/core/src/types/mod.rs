//! Core types for the online store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{CurrencyCode, MAX_PRICE, Price, format_amount, is_valid_price};
pub use product::{NewProduct, Product, ProductDraft, ProductValidationError};
