use std::collections::HashMap;

use sqlx::QueryBuilder;

use crate::db::DbPool;
use crate::dto::cart::CartView;
use crate::error::AppResult;
use crate::models::{Cart, Product};

/// Resolve the session cart against the product store. Ids with no matching
/// product (deleted after they were added) are dropped silently; the total
/// is the price sum over what actually resolved.
pub async fn view_cart(pool: &DbPool, cart: &Cart) -> AppResult<CartView> {
    if cart.is_empty() {
        return Ok(CartView::empty());
    }

    let mut builder = QueryBuilder::new("SELECT * FROM products WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in cart.ids() {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let rows = builder
        .build_query_as::<Product>()
        .fetch_all(pool)
        .await?;

    // Re-impose cart insertion order; IN (...) gives store order.
    let mut by_id: HashMap<i64, Product> = rows.into_iter().map(|p| (p.id, p)).collect();
    let items: Vec<Product> = cart
        .ids()
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect();

    let total = items.iter().map(|p| p.price).sum();
    Ok(CartView { items, total })
}
