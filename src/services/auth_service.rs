use tower_sessions::Session;

use crate::dto::auth::LoginForm;
use crate::error::{AppError, AppResult};
use crate::middleware::session::{clear_admin, set_admin};
use crate::state::AppState;

/// Check the submitted credentials and, on success, mark the session as
/// authenticated. Wrong credentials come back as a user-visible error; the
/// verifier deliberately does not say which half was wrong.
pub async fn login(state: &AppState, session: &Session, form: LoginForm) -> AppResult<()> {
    if !state.credentials.verify(&form.username, &form.password) {
        tracing::info!(username = %form.username, "failed admin login");
        return Err(AppError::Validation(
            "invalid username or password".to_string(),
        ));
    }
    set_admin(session).await?;
    tracing::info!(username = %form.username, "admin logged in");
    Ok(())
}

/// Unconditional: logging out an anonymous session is a no-op.
pub async fn logout(session: &Session) -> AppResult<()> {
    clear_admin(session).await
}
