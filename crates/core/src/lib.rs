//! Online Store Core - Shared types and the cart model.
//!
//! This crate provides the domain types used across all online store components:
//! - `storefront` - Catalog API, server-rendered shop pages and the admin form
//! - `cli` - Command-line tools for migrations, seeding and catalog management
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure state transitions - no
//! network, no database access. Cart persistence goes through the
//! [`cart::CartStorage`] trait so the cart ledger can be driven by a browser
//! cookie in production and by an in-memory map in tests.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices and catalog products
//! - [`cart`] - Cart line items, the persisted blob codec and [`cart::CartModel`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{
    CART_KEY, Cart, CartDecodeError, CartLineItem, CartModel, CartProduct, CartStorage,
    CartStorageError, CartUpdate, MemoryCartStorage, QuantityChange,
};
pub use types::*;
