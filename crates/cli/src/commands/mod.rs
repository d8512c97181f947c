//! Subcommand implementations.

pub mod migrate;
pub mod product;
pub mod seed;

use online_store_storefront::config::get_database_url;
use online_store_storefront::db;
use sqlx::SqlitePool;

/// Connect to the catalog store named by the environment.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub async fn connect() -> Result<SqlitePool, sqlx::Error> {
    dotenvy::dotenv().ok();

    let database_url = get_database_url("STORE_DATABASE_URL");
    tracing::info!("Connecting to catalog database...");
    db::create_pool(&database_url).await
}
