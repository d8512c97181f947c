//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Entry page (badge + product grid region)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store reachable)
//!
//! # Products (HTMX fragments)
//! GET  /products/grid          - Product grid, fetched by the entry page
//!
//! # Cart (HTMX fragments, state in the cart cookie)
//! GET  /cart                   - Cart page
//! GET  /cart/items             - Cart items + summary fragment
//! GET  /cart/count             - Cart count badge fragment
//! POST /cart/add               - Add one unit (returns notice + badge)
//! POST /cart/update            - Change quantity by delta (returns cart items + badge)
//! POST /cart/remove            - Remove line (returns cart items + badge)
//! POST /checkout               - Demo checkout notice
//!
//! # Admin (no authentication)
//! GET  /admin                  - Add-product form
//! POST /admin/products         - Submit the form (returns the form fragment)
//!
//! # Catalog API (JSON, CORS-enabled)
//! GET  /api/products           - All products
//! GET  /api/products/{id}      - One product, 404 if unknown
//! POST /api/admin/products     - Create product, 201 {id}
//! ```

pub mod admin;
pub mod api;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/grid", get(products::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the admin form routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::form_page))
        .route("/products", post(admin::submit))
}

/// Create the JSON catalog API router.
///
/// Any origin may call the API.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::list_products))
        .route("/products/{id}", get(api::get_product))
        .route("/admin/products", post(api::create_product))
        .layer(CorsLayer::permissive())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Entry page
        .route("/", get(home::home))
        // Product fragments
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Demo checkout
        .route("/checkout", post(cart::checkout))
        // Admin form
        .nest("/admin", admin_routes())
        // JSON API
        .nest("/api", api_routes())
}
