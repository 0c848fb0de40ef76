//! Admin guard: an extractor that only lets a request through when the
//! session carries the admin flag. Anonymous requests are redirected to the
//! login view before any handler code runs.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::middleware::session::session_keys;

pub struct AdminUser;

pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        Redirect::to("/profile").into_response()
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // SessionManagerLayer puts the session into request extensions.
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection)?;

        let logged_in = session
            .get::<bool>(session_keys::ADMIN)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        if logged_in {
            Ok(AdminUser)
        } else {
            Err(AdminRejection)
        }
    }
}
