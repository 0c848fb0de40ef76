use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{auth::LoginForm, cart::{CartContents, CartView}, products::ProductList},
    middleware::session::SESSION_COOKIE_NAME,
    models::Product,
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, catalog, health, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::index,
        catalog::catalog,
        cart::view_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::checkout,
        auth::login_page,
        auth::login,
        auth::logout,
        admin::admin_panel,
        admin::add_product_page,
        admin::add_product,
        admin::edit_product,
        admin::delete_product
    ),
    components(
        schemas(
            Product,
            ProductList,
            CartView,
            CartContents,
            LoginForm,
            params::CatalogQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<CartContents>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Catalog browsing and search"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Auth", description = "Admin login and logout"),
        (name = "Admin", description = "Product administration"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
