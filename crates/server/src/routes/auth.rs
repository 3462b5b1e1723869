use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use models::user::User;
use service::auth::{self, domain::LoginInput};
use service::session::SessionManager;
use service::store::Store;

use crate::errors::ApiError;

/// Marker cookie so the browser knows a portal session is open; the
/// authoritative state is the session manager's persisted record.
pub const SESSION_COOKIE: &str = "portal_session";

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionManager>,
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth", request_body = crate::openapi::LoginRequestDoc,
    responses((status = 200, description = "OK"), (status = 401, description = "Invalid credentials"), (status = 403, description = "Account expired")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let user = auth::authenticate(&state.store, &input.username, &input.password).await?;
    state.sessions.login(&user.id).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, user.id.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    Ok((jar.add(cookie), Json(user)))
}

#[utoipa::path(post, path = "/api/auth/logout", tag = "auth",
    responses((status = 204, description = "Session cleared")))]
pub async fn logout(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    state.sessions.logout().await?;
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    Ok((jar, StatusCode::NO_CONTENT))
}

#[utoipa::path(get, path = "/api/auth/me", tag = "auth",
    responses((status = 200, description = "OK"), (status = 303, description = "Not authenticated")))]
pub async fn me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}
