//! Demo catalog seeding.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use online_store_core::NewProduct;

use super::{ProductRepository, RepositoryError};

/// The demo catalog inserted into an empty store.
#[must_use]
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "قهوة مختصة V60".to_string(),
            description: "قهوة عربية مختصة محمصة طازجة مناسبة لطريقة تحضير V60.".to_string(),
            price: Decimal::new(1250, 2),
            image: "images/coffee.svg".to_string(),
            category: "مشروبات / Coffee".to_string(),
            stock: 50,
        },
        NewProduct {
            name: "سماعات بلوتوث لاسلكية".to_string(),
            description: "سماعات أذن لاسلكية بجودة صوت عالية وعزل ضوضاء.".to_string(),
            price: Decimal::new(3599, 2),
            image: "images/earbuds.svg".to_string(),
            category: "إلكترونيات / Electronics".to_string(),
            stock: 100,
        },
        NewProduct {
            name: "كتاب أساسيات علم التشريح".to_string(),
            description: "كتاب مبسط لطلاب الطب يشرح أساسيات علم التشريح مع صور توضيحية."
                .to_string(),
            price: Decimal::new(2200, 2),
            image: "images/anatomy-book.svg".to_string(),
            category: "كتب / Books".to_string(),
            stock: 30,
        },
        NewProduct {
            name: "كيبورد ميكانيكي للألعاب".to_string(),
            description: "كيبورد ميكانيكي بإضاءة RGB مناسب للألعاب والعمل.".to_string(),
            price: Decimal::new(4999, 2),
            image: "images/keyboard.svg".to_string(),
            category: "إلكترونيات / Electronics".to_string(),
            stock: 20,
        },
        NewProduct {
            name: "دفتر ملاحظات منظم".to_string(),
            description: "دفتر ملاحظات بتقسيمات أسبوعية وخطط دراسية.".to_string(),
            price: Decimal::new(750, 2),
            image: "images/notebook.svg".to_string(),
            category: "قرطاسية / Stationery".to_string(),
            stock: 80,
        },
    ]
}

/// Insert the demo catalog if the store has no products.
///
/// Returns the number of products inserted (zero when the store already had data).
///
/// # Errors
///
/// Returns `RepositoryError` if counting or inserting fails.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<usize, RepositoryError> {
    let repo = ProductRepository::new(pool);
    if repo.count().await? > 0 {
        return Ok(0);
    }

    seed(pool).await
}

/// Insert the demo catalog unconditionally, in a single transaction.
///
/// # Errors
///
/// Returns `RepositoryError` if any insert fails; nothing is written in that case.
pub async fn seed(pool: &SqlitePool) -> Result<usize, RepositoryError> {
    tracing::info!("Seeding demo products");

    let products = demo_products();
    let mut tx = pool.begin().await?;
    for product in &products {
        sqlx::query(
            r"
            INSERT INTO products (name, description, price, image, category, stock)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        // REAL affinity converts numeric text on insert.
        .bind(product.price.to_string())
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.stock)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(products.len())
}
