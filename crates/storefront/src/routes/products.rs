//! Product grid renderer.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use online_store_core::{CurrencyCode, Product, format_amount};

use crate::services::CatalogError;
use crate::state::AppState;

/// Image shown on cards for products without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Message shown in place of the grid when the catalog cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products.";

/// Product card display data for templates.
#[derive(Clone, Debug)]
pub struct ProductCardView {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Formatted price, e.g. `12.50 SAR`.
    pub price: String,
    /// Raw price posted back when the card is added to the cart.
    pub price_value: String,
    pub image_url: String,
}

impl ProductCardView {
    /// Build a card from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, currency: CurrencyCode) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_amount(product.price, currency),
            price_value: product.price.normalize().to_string(),
            image_url: product
                .image_url()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
        }
    }
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
    pub error: Option<&'static str>,
}

impl ProductGridTemplate {
    /// Render the outcome of a catalog fetch.
    ///
    /// A failed fetch is logged and replaces the whole grid with
    /// [`LOAD_ERROR_MESSAGE`].
    #[must_use]
    pub fn from_result(
        result: Result<Vec<Product>, CatalogError>,
        currency: CurrencyCode,
    ) -> Self {
        match result {
            Ok(products) => Self {
                products: products
                    .iter()
                    .map(|product| ProductCardView::from_product(product, currency))
                    .collect(),
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                Self {
                    products: Vec::new(),
                    error: Some(LOAD_ERROR_MESSAGE),
                }
            }
        }
    }
}

/// Render the product grid (HTMX).
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.catalog().list_products().await;
    ProductGridTemplate::from_result(result, state.currency())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use online_store_core::ProductId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::db::RepositoryError;

    fn product(image: &str) -> Product {
        Product {
            id: ProductId::new(2),
            name: "Earbuds".to_string(),
            description: "Wireless".to_string(),
            price: Decimal::new(3599, 2),
            image: image.to_string(),
            category: "Electronics".to_string(),
            stock: 100,
        }
    }

    #[test]
    fn test_card_formats_price_and_keeps_image() {
        let card = ProductCardView::from_product(&product("images/earbuds.jpg"), CurrencyCode::SAR);
        assert_eq!(card.price, "35.99 SAR");
        assert_eq!(card.price_value, "35.99");
        assert_eq!(card.image_url, "images/earbuds.jpg");
    }

    #[test]
    fn test_card_falls_back_to_placeholder() {
        let card = ProductCardView::from_product(&product(""), CurrencyCode::SAR);
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_grid_renders_one_card_per_product() {
        let html = ProductGridTemplate::from_result(
            Ok(vec![product(""), product("x.jpg")]),
            CurrencyCode::SAR,
        )
        .render()
        .unwrap();

        assert_eq!(html.matches("class=\"product-card\"").count(), 2);
        assert!(html.contains("35.99 SAR"));
        assert!(html.contains("hx-post=\"/cart/add\""));
        assert!(!html.contains(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_grid_failure_replaces_contents() {
        let err = CatalogError::Repository(RepositoryError::DataCorruption("bad".to_string()));
        let html = ProductGridTemplate::from_result(Err(err), CurrencyCode::SAR)
            .render()
            .unwrap();

        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(!html.contains("product-card"));
    }
}
