use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use models::{
    order::{OrderRequest, OrderStatus},
    user::User,
};
use service::errors::ServiceError;
use service::{catalog_service, order_service};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusInput {
    pub status: OrderStatus,
}

#[utoipa::path(post, path = "/api/orders", tag = "orders", request_body = crate::openapi::CreateOrderDoc,
    responses((status = 200, description = "Request created"), (status = 400, description = "Bad Request"), (status = 404, description = "Unknown product")))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<User>,
    Json(input): Json<CreateOrderInput>,
) -> Result<Json<OrderRequest>, ApiError> {
    let product = catalog_service::get_product(&state.store, &input.product_id)
        .await
        .ok_or_else(|| ServiceError::not_found("product"))?;
    let order = order_service::quote_request(&user, &product, input.quantity, input.notes)?;
    order_service::create_order(&state.store, order.clone()).await?;
    Ok(Json(order))
}

#[utoipa::path(get, path = "/api/orders/mine", tag = "orders",
    responses((status = 200, description = "OK")))]
pub async fn list_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<User>,
) -> Json<Vec<OrderRequest>> {
    Json(order_service::list_orders_for_user(&state.store, &user.id).await)
}

#[utoipa::path(get, path = "/api/admin/orders", tag = "admin",
    responses((status = 200, description = "OK, newest first")))]
pub async fn list_all(State(state): State<ServerState>) -> Json<Vec<OrderRequest>> {
    Json(order_service::list_orders(&state.store).await)
}

#[utoipa::path(patch, path = "/api/admin/orders/{id}/status", tag = "admin", request_body = crate::openapi::UpdateOrderStatusDoc,
    responses((status = 204, description = "Updated"), (status = 400, description = "Illegal transition"), (status = 404, description = "Unknown order")))]
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateStatusInput>,
) -> Result<StatusCode, ApiError> {
    order_service::update_order_status(&state.store, &id, input.status).await?;
    Ok(StatusCode::NO_CONTENT)
}
