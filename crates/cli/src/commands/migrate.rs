//! Database migration command.
//!
//! Migrations live in `crates/storefront/migrations/` and are embedded in the
//! storefront library, so the CLI and the server always agree on the schema.

use online_store_storefront::db;

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    tracing::info!("Running catalog migrations...");
    db::migrate(&pool).await?;

    tracing::info!("Catalog migrations complete!");
    Ok(())
}
