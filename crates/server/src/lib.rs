//! HTTP layer of the rental catalog: an axum router over a shared
//! [`service::storage::Storage`].

pub mod errors;
pub mod extract;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{run, run_with_config};
pub use state::AppState;
