//! Product repository for catalog store operations.
//!
//! Prices live in a `REAL` column and are converted to `Decimal` at this
//! boundary so nothing above the repository does float arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use sqlx::SqlitePool;

use online_store_core::{NewProduct, Product, ProductId, is_valid_price};

use super::RepositoryError;

/// Raw `products` row.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: f64,
    image: Option<String>,
    category: Option<String>,
    stock: Option<i64>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Decimal::from_f64(row.price)
            .map(|price| price.normalize())
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!(
                    "product {} has a non-finite price",
                    row.id
                ))
            })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            price,
            image: row.image.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            stock: row.stock.unwrap_or(0),
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every product in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is not a number.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, image, category, stock
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is not a number.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, image, category, stock
            FROM products
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a product and return its store-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the price is outside
    /// `0..=MAX_PRICE`, where it could not be read back from `REAL`.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let price = Some(product.price)
            .filter(|price| is_valid_price(*price))
            .and_then(|price| price.to_f64())
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!("price {} is out of range", product.price))
            })?;

        let result = sqlx::query(
            r"
            INSERT INTO products (name, description, price, image, category, stock)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(price)
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.stock)
        .execute(self.pool)
        .await?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }

    /// Count the products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
