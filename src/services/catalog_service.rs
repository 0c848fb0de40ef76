use sqlx::QueryBuilder;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::Product;
use crate::routes::params::{CatalogQuery, SortBy};

/// Every supplied filter applies as a conjunction; absent filters impose
/// nothing. The result is fully materialized, there is no pagination.
pub async fn list_products(pool: &DbPool, query: &CatalogQuery) -> AppResult<Vec<Product>> {
    let mut builder = QueryBuilder::new("SELECT * FROM products WHERE 1 = 1");

    if let Some(category) = query.category.as_ref().filter(|s| !s.is_empty()) {
        builder.push(" AND category = ").push_bind(category.as_str());
    }

    if let Some(search) = query.search.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search.to_lowercase());
        builder.push(" AND LOWER(name) LIKE ").push_bind(pattern);
    }

    if query.available_only() {
        builder.push(" AND price > 0");
    }

    match query.sort_by() {
        Some(SortBy::Price) => {
            builder.push(" ORDER BY price ASC");
        }
        Some(SortBy::Name) => {
            builder.push(" ORDER BY name ASC");
        }
        None => {}
    }

    let products = builder
        .build_query_as::<Product>()
        .fetch_all(pool)
        .await?;
    Ok(products)
}

/// Up to three random products that have an image, for the landing page.
pub async fn featured_products(pool: &DbPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE image_url IS NOT NULL ORDER BY RANDOM() LIMIT 3",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}
