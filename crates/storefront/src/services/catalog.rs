//! Catalog service.
//!
//! Stateless operations shared by the JSON API and the admin form: list,
//! fetch one, and create after required-field validation. There is no other
//! business logic here; stock is informational and never enforced.

use sqlx::SqlitePool;
use tracing::instrument;

use online_store_core::{Product, ProductDraft, ProductId, ProductValidationError};

use crate::db::{ProductRepository, RepositoryError};

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ProductValidationError),
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Catalog operations over a connection pool.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// All products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.list().await?)
    }

    /// One product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if no product has this id, or
    /// `CatalogError::Repository` if the store fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Validate a draft and insert it, returning the new id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if name or price is missing (or a
    /// numeric field is negative), or `CatalogError::Repository` if the insert fails.
    #[instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<ProductId, CatalogError> {
        let product = draft.validate()?;
        let id = self.products.create(&product).await?;
        tracing::info!(product_id = %id, name = %product.name, "Product created");
        Ok(id)
    }
}
