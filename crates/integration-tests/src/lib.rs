//! Integration tests for the online store.
//!
//! Each test starts the full storefront router on an ephemeral local port,
//! backed by a fresh in-memory catalog, and talks to it over real HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p online-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_api` - JSON catalog endpoints
//! - `cart_flow` - Cart fragments and the cart cookie
//! - `admin_form` - Add-product form submissions

use online_store_core::{CART_KEY, Cart, CartStorage};
use online_store_storefront::cart_cookie::CartCookies;
use online_store_storefront::{AppState, StorefrontConfig, db, router};
use reqwest::Client;
use sqlx::SqlitePool;

/// A running storefront plus a cookie-keeping client.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: SqlitePool,
}

impl TestContext {
    /// Start a storefront seeded with the demo catalog.
    pub async fn new() -> Self {
        let ctx = Self::empty().await;
        db::seed::seed(&ctx.pool)
            .await
            .expect("Failed to seed catalog");
        ctx
    }

    /// Start a storefront with an empty catalog.
    pub async fn empty() -> Self {
        let pool = db::create_memory_pool()
            .await
            .expect("Failed to create database pool");
        db::migrate(&pool).await.expect("Failed to run migrations");

        let state = AppState::new(StorefrontConfig::in_memory(), pool.clone());
        let app = router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                panic!("Test server failed: {e}");
            }
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            pool,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// `Set-Cookie` values carried by a response.
#[must_use]
pub fn set_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

/// Decode the cart carried by a response's `Set-Cookie` headers, if any.
#[must_use]
pub fn cart_from_response(response: &reqwest::Response) -> Option<Cart> {
    let values = set_cookies(response);
    let cookies = CartCookies::from_set_cookie(values.iter().map(String::as_str));
    cookies
        .read(CART_KEY)
        .and_then(|blob| Cart::from_blob(&blob).ok())
}
