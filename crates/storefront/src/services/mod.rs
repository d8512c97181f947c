//! Business services layered over the catalog store.

pub mod catalog;

pub use catalog::{CatalogError, CatalogService};
