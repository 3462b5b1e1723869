use axum::{extract::State, Json};
use serde::Serialize;

use models::order::OrderStatus;

use crate::routes::auth::ServerState;

/// The admin dashboard cards: open requests plus collection sizes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub pending_orders: usize,
    pub users: usize,
    pub brands: usize,
    pub products: usize,
}

#[utoipa::path(get, path = "/api/admin/stats", tag = "admin",
    responses((status = 200, description = "OK")))]
pub async fn stats(State(state): State<ServerState>) -> Json<AdminStats> {
    let pending_orders = state
        .store
        .orders
        .all()
        .await
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    Json(AdminStats {
        pending_orders,
        users: state.store.users.all().await.len(),
        brands: state.store.brands.all().await.len(),
        products: state.store.products.all().await.len(),
    })
}
