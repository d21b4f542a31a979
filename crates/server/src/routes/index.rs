use std::collections::BTreeMap;

use axum::{extract::State, Json};
use common::types::Status;
use service::catalog::stats as catalog_stats;

use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/status", tag = "index", responses((status = 200, description = "API is up", body = crate::openapi::StatusDoc)))]
pub async fn status() -> Json<Status> {
    Json(Status::ok())
}

#[utoipa::path(get, path = "/api/v1/stats", tag = "index", responses((status = 200, description = "Object count per resource", body = crate::openapi::StatsDoc)))]
pub async fn stats(State(state): State<AppState>) -> Json<BTreeMap<&'static str, usize>> {
    Json(catalog_stats::counts(state.store.as_ref()).await)
}
