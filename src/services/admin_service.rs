use crate::db::DbPool;
use crate::dto::products::{ProductForm, parse_price};
use crate::error::{AppError, AppResult};
use crate::models::Product;
use crate::state::AppState;
use crate::storage::allowed_image;

/// Full product listing for the admin view.
pub async fn list_all(pool: &DbPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(products)
}

pub async fn create_product(state: &AppState, form: ProductForm) -> AppResult<Product> {
    let price = parse_price(&form.price)?;
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    // A file with a disallowed extension is silently not attached; a save
    // failure aborts the create.
    let mut image_url = None;
    if let Some(image) = &form.image {
        if allowed_image(&image.filename) {
            let stored = state.uploads.save(&image.filename, &image.bytes).await?;
            image_url = Some(stored.url);
        }
    }

    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price, image_url, description, barcode, category)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&form.name)
    .bind(price)
    .bind(&image_url)
    .bind(&form.description)
    .bind(&form.barcode)
    .bind(&form.category)
    .fetch_one(&state.pool)
    .await?;

    tracing::debug!(product_id = product.id, "product created");
    Ok(product)
}

/// Overwrites name, price, description and barcode from the form. The
/// category is deliberately left alone here. A new valid image replaces the
/// old file; no image in the form keeps the current one.
pub async fn update_product(state: &AppState, id: i64, form: ProductForm) -> AppResult<Product> {
    let existing = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let price = parse_price(&form.price)?;
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    let mut image_url = existing.image_url.clone();
    if let Some(image) = &form.image {
        if allowed_image(&image.filename) {
            if let Some(old_url) = &existing.image_url {
                state.uploads.delete_by_url(old_url).await;
            }
            let stored = state.uploads.save(&image.filename, &image.bytes).await?;
            image_url = Some(stored.url);
        }
    }

    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = $2, price = $3, image_url = $4, description = $5, barcode = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&form.name)
    .bind(price)
    .bind(&image_url)
    .bind(&form.description)
    .bind(&form.barcode)
    .fetch_one(&state.pool)
    .await?;

    tracing::debug!(product_id = id, "product updated");
    Ok(product)
}

/// Removes the record; the image file, if any, goes first (best effort, a
/// file already missing on disk is fine).
pub async fn delete_product(state: &AppState, id: i64) -> AppResult<()> {
    let existing = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    if let Some(url) = &existing.image_url {
        state.uploads.delete_by_url(url).await;
    }

    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    tracing::debug!(product_id = id, "product deleted");
    Ok(())
}
