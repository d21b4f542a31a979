use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;

/// Count every answered request by method and status.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let response = next.run(req).await;
    common::metrics::record_request(method.as_str(), response.status().as_u16());
    response
}

/// Re-read the backing file after the handler has answered, so external
/// edits become visible to the next request.
pub async fn refresh_store(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if state.refresh_after_request {
        let loaded = state.store.refresh().await;
        debug!(count = loaded, "store refreshed");
    }
    response
}
