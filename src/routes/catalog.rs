use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::CatalogQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/catalog", get(catalog))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Up to three random products with images", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn index(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = catalog_service::featured_products(&state.pool).await?;
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Featured products", data, None)))
}

#[utoipa::path(
    get,
    path = "/catalog",
    params(
        ("category" = Option<String>, Query, description = "Exact category match"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("availability" = Option<String>, Query, description = "\"available\" restricts to price > 0"),
        ("sort" = Option<String>, Query, description = "\"price\" or \"name\", ascending; anything else is store order")
    ),
    responses(
        (status = 200, description = "Filtered product listing", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = catalog_service::list_products(&state.pool, &query).await?;
    let meta = Meta::new(items.len() as i64);
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}
