//! Seed the catalog with the demo products.

use online_store_storefront::db::{self, seed};

/// Insert the demo products.
///
/// Migrations are applied first. Without `force`, a catalog that already
/// holds products is left untouched.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or an insert fails.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    db::migrate(&pool).await?;

    let inserted = if force {
        seed::seed(&pool).await?
    } else {
        seed::seed_if_empty(&pool).await?
    };

    if inserted == 0 {
        tracing::info!("Catalog already has products, nothing seeded (use --force to override)");
    } else {
        tracing::info!(count = inserted, "Seeding complete!");
    }
    Ok(())
}
