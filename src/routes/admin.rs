use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{get, post},
};

use crate::{
    dto::products::{ProductForm, ProductList},
    error::AppResult,
    middleware::auth::AdminUser,
    models::Product,
    response::{ApiResponse, Meta},
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_panel))
        .route("/add_product", get(add_product_page).post(add_product))
        .route("/admin/edit/{id}", post(edit_product))
        .route("/admin/delete/{id}", post(delete_product))
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "All products", body = ApiResponse<ProductList>),
        (status = 303, description = "Anonymous, redirected to login"),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn admin_panel(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = admin_service::list_all(&state.pool).await?;
    let meta = Meta::new(items.len() as i64);
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/add_product",
    responses(
        (status = 200, description = "Product form placeholder", body = ApiResponse<serde_json::Value>),
        (status = 303, description = "Anonymous, redirected to login"),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn add_product_page(_admin: AdminUser) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        "Add product",
        serde_json::json!({
            "fields": ["name", "price", "description", "barcode", "category", "image"]
        }),
        None,
    ))
}

#[utoipa::path(
    post,
    path = "/add_product",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Validation error"),
        (status = 303, description = "Anonymous, redirected to login"),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn add_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<Product>>> {
    let form = ProductForm::from_multipart(multipart).await?;
    let product = admin_service::create_product(&state, form).await?;
    Ok(Json(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/admin/edit/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 303, description = "Anonymous, redirected to login"),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn edit_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<Product>>> {
    let form = ProductForm::from_multipart(multipart).await?;
    let product = admin_service::update_product(&state, id, form).await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/admin/delete/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found"),
        (status = 303, description = "Anonymous, redirected to login"),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    admin_service::delete_product(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
