use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use tower_sessions::Session;

use crate::{
    dto::cart::{CartContents, CartView},
    error::AppResult,
    middleware::session::{clear_cart, load_cart, store_cart},
    response::{ApiResponse, Meta},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart", get(view_cart))
        .route("/add_to_cart/{id}", post(add_to_cart))
        .route("/remove_from_cart/{id}", post(remove_from_cart))
        .route("/checkout", post(checkout))
}

#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Resolved cart with total", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let cart = load_cart(&session).await?;
    let view = cart_service::view_cart(&state.pool, &cart).await?;
    Ok(Json(ApiResponse::success("Cart", view, None)))
}

#[utoipa::path(
    post,
    path = "/add_to_cart/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Cart ids after the add", body = ApiResponse<CartContents>)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    session: Session,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CartContents>>> {
    // Existence is not checked here; a stale id falls out at view time.
    let mut cart = load_cart(&session).await?;
    if cart.add(id) {
        store_cart(&session, &cart).await?;
    }
    let data = CartContents {
        ids: cart.ids().to_vec(),
    };
    Ok(Json(ApiResponse::success("Added to cart", data, None)))
}

#[utoipa::path(
    post,
    path = "/remove_from_cart/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Cart ids after the removal", body = ApiResponse<CartContents>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    session: Session,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CartContents>>> {
    let mut cart = load_cart(&session).await?;
    if cart.remove(id) {
        store_cart(&session, &cart).await?;
    }
    let data = CartContents {
        ids: cart.ids().to_vec(),
    };
    Ok(Json(ApiResponse::success("Removed from cart", data, None)))
}

#[utoipa::path(
    post,
    path = "/checkout",
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn checkout(session: Session) -> AppResult<Json<ApiResponse<CartView>>> {
    // No order record, no payment, no stock checks; checkout only empties
    // the cart.
    clear_cart(&session).await?;
    Ok(Json(ApiResponse::success(
        "Checked out",
        CartView::empty(),
        Some(Meta::empty()),
    )))
}
