//! Shared building blocks for the catalog workspace: response types,
//! logging setup, runtime environment checks and Prometheus metrics.

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;
