use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::{
    runtime,
    storage::{file_storage::FileStorage, Storage},
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the backing file named in `cfg` and build the router over it.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let path = Path::new(&cfg.storage.file_path);
    runtime::ensure_env(path).await?;

    let store = FileStorage::open(path).await;
    let count = store.count(None).await;
    info!(path = %store.file_path().display(), count = count, "object store loaded");

    let store: Arc<dyn Storage> = store;
    let state = AppState::new(store, cfg.storage.refresh_after_request);
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: load configuration, build the app and serve until the
/// listener fails.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg.bind_addr().parse()?;
    info!(service = "server", event = "listen", %addr, "starting catalog api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
