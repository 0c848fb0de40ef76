//! Session layer and typed accessors for the per-visitor state: the admin
//! flag and the cart. Sessions live in an in-memory store; they are
//! ephemeral by design and hold nothing worth persisting.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::error::{AppError, AppResult};
use crate::models::Cart;

pub const SESSION_COOKIE_NAME: &str = "storefront_session";

/// Session expiry on inactivity, in seconds.
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

pub mod session_keys {
    pub const ADMIN: &str = "admin";
    pub const CART: &str = "cart";
}

pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Load the session's cart, empty on first use.
pub async fn load_cart(session: &Session) -> AppResult<Cart> {
    let cart = session
        .get::<Cart>(session_keys::CART)
        .await
        .map_err(session_error)?
        .unwrap_or_default();
    Ok(cart)
}

pub async fn store_cart(session: &Session, cart: &Cart) -> AppResult<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(session_error)
}

pub async fn clear_cart(session: &Session) -> AppResult<()> {
    session
        .remove::<Cart>(session_keys::CART)
        .await
        .map_err(session_error)?;
    Ok(())
}

pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(session_keys::ADMIN)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

pub async fn set_admin(session: &Session) -> AppResult<()> {
    session
        .insert(session_keys::ADMIN, true)
        .await
        .map_err(session_error)
}

pub async fn clear_admin(session: &Session) -> AppResult<()> {
    session
        .remove::<bool>(session_keys::ADMIN)
        .await
        .map_err(session_error)?;
    Ok(())
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    AppError::Internal(anyhow::anyhow!("session store: {err}"))
}
