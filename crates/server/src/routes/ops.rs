use axum::{extract::State, http::StatusCode, Json};
use common::types::Health;
use models::ClassName;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "ops", responses((status = 200, description = "Process is alive", body = crate::openapi::HealthDoc)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Prometheus text exposition; per-class object gauges are refreshed first.
pub async fn metrics(State(state): State<AppState>) -> (StatusCode, String) {
    for class in ClassName::ALL {
        let count = state.store.count(Some(class)).await;
        common::metrics::STORE_OBJECTS
            .with_label_values(&[class.as_str()])
            .set(count as i64);
    }
    common::metrics::encode_metrics()
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
