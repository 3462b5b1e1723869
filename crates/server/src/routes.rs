use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::guard;
use crate::openapi;

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod orders;
pub mod users;

pub use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static frontend + health + login as
/// public surface, then one route group per guard level. The guard runs
/// on every request to a protected route; nothing is cached.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .fallback_service(static_dir);

    // Any authenticated identity: catalog browsing and the order flow
    let portal = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/brands", get(catalog::list_brands))
        .route("/api/brands/:id", get(catalog::get_brand))
        .route("/api/products", get(catalog::list_products))
        .route("/api/orders", post(orders::create))
        .route("/api/orders/mine", get(orders::list_mine))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_user));

    // Administrators: user management, inventory, request handling
    let admin_routes = Router::new()
        .route("/api/admin/brands", post(catalog::upsert_brand))
        .route("/api/admin/products", post(catalog::upsert_product))
        .route("/api/admin/products/:id", delete(catalog::delete_product))
        .route("/api/admin/users", get(users::list).post(users::upsert))
        .route("/api/admin/orders", get(orders::list_all))
        .route("/api/admin/orders/:id/status", patch(orders::update_status))
        .route("/api/admin/stats", get(admin::stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_admin));

    public
        .merge(portal)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
