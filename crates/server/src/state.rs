use std::sync::Arc;

use service::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    /// Re-read the backing file once each request has been answered.
    pub refresh_after_request: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, refresh_after_request: bool) -> Self {
        Self { store, refresh_after_request }
    }
}
