use axum::{
    Form, Json, Router,
    extract::State,
    response::Redirect,
    routing::get,
};
use tower_sessions::Session;

use crate::{
    dto::auth::LoginForm,
    error::AppResult,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(login_page).post(login))
        .route("/logout", get(logout))
}

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Login form placeholder", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Auth"
)]
pub async fn login_page() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        "Login",
        serde_json::json!({ "fields": ["username", "password"] }),
        None,
    ))
}

#[utoipa::path(
    post,
    path = "/profile",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirected to the admin view"),
        (status = 400, description = "Invalid credentials"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    auth_service::login(&state, &session, form).await?;
    Ok(Redirect::to("/admin"))
}

#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 303, description = "Logged out")),
    tag = "Auth"
)]
pub async fn logout(session: Session) -> AppResult<Redirect> {
    auth_service::logout(&session).await?;
    Ok(Redirect::to("/"))
}
