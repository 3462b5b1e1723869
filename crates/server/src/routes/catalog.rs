use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use models::{brand::Brand, product::Product};
use service::catalog_service;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/api/brands", tag = "catalog",
    responses((status = 200, description = "OK")))]
pub async fn list_brands(State(state): State<ServerState>) -> Json<Vec<Brand>> {
    Json(catalog_service::list_brands(&state.store).await)
}

#[utoipa::path(get, path = "/api/brands/{id}", tag = "catalog",
    responses((status = 200, description = "OK"), (status = 404, description = "Unknown brand")))]
pub async fn get_brand(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, ApiError> {
    let brand = catalog_service::get_brand(&state.store, &id)
        .await
        .ok_or_else(|| ServiceError::not_found("brand"))?;
    Ok(Json(brand))
}

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub brand_id: Option<String>,
}

#[utoipa::path(get, path = "/api/products", tag = "catalog", params(("brand_id" = Option<String>, Query, description = "Restrict to one brand")),
    responses((status = 200, description = "OK")))]
pub async fn list_products(
    State(state): State<ServerState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    Json(catalog_service::list_products(&state.store, query.brand_id.as_deref()).await)
}

#[utoipa::path(post, path = "/api/admin/brands", tag = "admin", request_body = crate::openapi::BrandDoc,
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request")))]
pub async fn upsert_brand(
    State(state): State<ServerState>,
    Json(brand): Json<Brand>,
) -> Result<Json<serde_json::Value>, ApiError> {
    catalog_service::upsert_brand(&state.store, brand).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}

#[utoipa::path(post, path = "/api/admin/products", tag = "admin", request_body = crate::openapi::ProductDoc,
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request")))]
pub async fn upsert_product(
    State(state): State<ServerState>,
    Json(product): Json<Product>,
) -> Result<Json<serde_json::Value>, ApiError> {
    catalog_service::upsert_product(&state.store, product).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}

#[utoipa::path(delete, path = "/api/admin/products/{id}", tag = "admin",
    responses((status = 204, description = "Removed")))]
pub async fn delete_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog_service::delete_product(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
