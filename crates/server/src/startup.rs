use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::seed;
use service::session::SessionManager;
use service::store::Store;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {}", e)))
}

/// Data directory from configs or `PORTAL_DATA_DIR`, defaulting to `data`.
fn load_data_dir() -> String {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.storage.normalize_from_env();
            cfg.storage.data_dir
        }
        Err(_) => env::var("PORTAL_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    }
}

/// Public entry: open the store, seed, restore the session, serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let data_dir = load_data_dir();
    tokio::fs::create_dir_all("frontend").await.ok();

    let store = Store::open(&data_dir).await?;
    seed::ensure_seed(&store).await?;
    let sessions = SessionManager::restore(Arc::clone(&store)).await;
    let state = ServerState { store, sessions };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, %data_dir, "starting distributor portal");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
