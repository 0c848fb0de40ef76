use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// The resolved cart: products joined against the store, in cart order,
/// with the running total. Ids whose product has since been deleted are
/// simply absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<Product>,
    pub total: f64,
}

impl CartView {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0.0,
        }
    }
}

/// Raw cart contents as held in the session.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartContents {
    pub ids: Vec<i64>,
}
