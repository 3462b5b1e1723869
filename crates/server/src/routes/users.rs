use axum::{extract::State, Json};
use serde::Deserialize;

use models::user::User;
use service::user_service;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Upsert payload: the public profile plus an optional new password.
/// Leaving the password out keeps the stored credential.
#[derive(Debug, Deserialize)]
pub struct UpsertUserInput {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub password: Option<String>,
}

#[utoipa::path(get, path = "/api/admin/users", tag = "admin",
    responses((status = 200, description = "OK, password hashes stripped")))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<User>> {
    Json(user_service::list_users(&state.store).await)
}

#[utoipa::path(post, path = "/api/admin/users", tag = "admin", request_body = crate::openapi::UpsertUserDoc,
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request")))]
pub async fn upsert(
    State(state): State<ServerState>,
    Json(input): Json<UpsertUserInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    user_service::upsert_user(&state.store, input.user, input.password).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}
