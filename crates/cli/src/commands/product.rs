//! Catalog product commands.

use online_store_core::types::product::parse_decimal;
use online_store_core::{CurrencyCode, ProductDraft, format_amount};
use online_store_storefront::services::CatalogService;

/// Arguments for `product add`.
pub struct AddArgs {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub stock: i64,
}

impl AddArgs {
    fn into_draft(self) -> ProductDraft {
        ProductDraft {
            price: parse_decimal(&self.price),
            name: Some(self.name),
            description: Some(self.description),
            image: Some(self.image),
            category: Some(self.category),
            stock: Some(self.stock),
        }
    }
}

/// Add one product, validated like the admin form and JSON API.
///
/// # Errors
///
/// Returns an error if validation fails or the insert fails.
pub async fn add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let id = CatalogService::new(&pool).create_product(args.into_draft()).await?;

    tracing::info!(%id, "Product saved");
    Ok(())
}

/// Print every product, one per line.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let products = CatalogService::new(&pool).list_products().await?;

    #[allow(clippy::print_stdout)]
    {
        for product in &products {
            println!(
                "{:>4}  {:<32}  {:>14}  stock {:>5}  {}",
                product.id,
                product.name,
                format_amount(product.price, CurrencyCode::default()),
                product.stock,
                product.category,
            );
        }
        println!("{} product(s)", products.len());
    }
    Ok(())
}
