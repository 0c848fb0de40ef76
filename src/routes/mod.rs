use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod params;

// Build the application router without binding state; it is provided at the
// top level. Routes sit at the root, matching the storefront's URL scheme.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(cart::router())
        .merge(auth::router())
        .merge(admin::router())
}
