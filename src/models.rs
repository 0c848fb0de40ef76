use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Cart contents for one session: product ids, insertion order preserved,
/// no duplicates. Ids may dangle once a product is deleted; they are dropped
/// when the cart is resolved against the store, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart(pub Vec<i64>);

impl Cart {
    /// Append `product_id` unless it is already present. Returns whether the
    /// cart changed. Existence in the product store is not checked.
    pub fn add(&mut self, product_id: i64) -> bool {
        if self.0.contains(&product_id) {
            return false;
        }
        self.0.push(product_id);
        true
    }

    /// Remove `product_id` if present. Returns whether the cart changed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.0.len();
        self.0.retain(|id| *id != product_id);
        self.0.len() != before
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
