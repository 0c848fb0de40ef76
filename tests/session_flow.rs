use std::str::FromStr;
use std::sync::Arc;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use password_hash::rand_core::OsRng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session};

use storefront_api::{
    credentials::ArgonCredentials,
    dto::auth::LoginForm,
    dto::products::ProductForm,
    error::AppError,
    middleware::session::{create_session_layer, is_admin, load_cart, store_cart},
    models::Cart,
    routes::create_router,
    routes::params::CatalogQuery,
    services::{admin_service, auth_service, catalog_service},
    state::AppState,
    storage::UploadStore,
};

async fn setup_state() -> anyhow::Result<(AppState, TempDir)> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let dir = tempfile::tempdir()?;
    let uploads = UploadStore::new(dir.path(), "/static/uploads");

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(b"secret123", &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let state = AppState {
        pool,
        uploads,
        credentials: Arc::new(ArgonCredentials::new("admin", hash)),
    };
    Ok((state, dir))
}

fn fresh_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

#[tokio::test]
async fn login_flips_the_admin_flag_and_logout_clears_it() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let session = fresh_session();

    assert!(!is_admin(&session).await);

    let wrong = auth_service::login(
        &state,
        &session,
        LoginForm {
            username: "admin".into(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(wrong, Err(AppError::Validation(_))));
    assert!(!is_admin(&session).await);

    auth_service::login(
        &state,
        &session,
        LoginForm {
            username: "admin".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    assert!(is_admin(&session).await);

    auth_service::logout(&session).await?;
    assert!(!is_admin(&session).await);

    // logging out again is a no-op
    auth_service::logout(&session).await?;
    assert!(!is_admin(&session).await);

    Ok(())
}

#[tokio::test]
async fn cart_survives_a_session_round_trip() -> anyhow::Result<()> {
    let session = fresh_session();

    // first use: empty
    let cart = load_cart(&session).await?;
    assert!(cart.is_empty());

    let mut cart = Cart::default();
    cart.add(3);
    cart.add(8);
    store_cart(&session, &cart).await?;

    let reloaded = load_cart(&session).await?;
    assert_eq!(reloaded, cart);

    Ok(())
}

#[tokio::test]
async fn anonymous_admin_requests_redirect_and_mutate_nothing() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let product = admin_service::create_product(
        &state,
        ProductForm {
            name: "Mug".into(),
            price: "9.99".into(),
            ..Default::default()
        },
    )
    .await?;

    let app = create_router()
        .layer(create_session_layer())
        .with_state(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/admin/delete/{}", product.id))
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/profile")
    );

    // store untouched
    let all = catalog_service::list_products(&state.pool, &CatalogQuery::default()).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
