use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, IntGaugeVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "catalog_http_requests_total",
        "Total HTTP requests handled, by method and status code",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static STORE_SAVES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("catalog_store_saves_total", "Total whole-file saves of the object store")
        .expect("register store_saves_total")
});

pub static STORE_RELOADS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "catalog_store_reloads_total",
        "Total reloads of the object store from its backing file"
    )
    .expect("register store_reloads_total")
});

pub static STORE_SAVE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "catalog_store_save_duration_seconds",
        "Time spent serializing and writing the backing file",
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register store_save_duration")
});

pub static STORE_OBJECTS: Lazy<IntGaugeVec> = Lazy::new(|| {
    register_int_gauge_vec!("catalog_store_objects", "Objects currently held by the store, by class", &["class"])
        .expect("register store_objects")
});

/// Record one handled HTTP request.
pub fn record_request(method: &str, status: u16) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, &status.to_string()])
        .inc();
}

/// Render the default registry in the Prometheus text format.
pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
