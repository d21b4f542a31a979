use axum::{
    http::{Method, Uri},
    middleware,
    routing::{get, post},
    Json, Router,
};
use models::{Model, Object};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, Level};

use crate::errors::JsonApiError;
use crate::middleware::{refresh_store, track_requests};
use crate::state::AppState;

pub mod amenities;
pub mod cities;
pub mod index;
pub mod ops;
pub mod place_amenities;
pub mod places;
pub mod reviews;
pub mod states;
pub mod users;

/// Public JSON form of one record.
pub(crate) fn public<M: Model>(record: M) -> Result<Json<Value>, JsonApiError> {
    Ok(Json(Into::<Object>::into(record).to_public_json()?))
}

pub(crate) fn public_list<M: Model>(records: Vec<M>) -> Result<Json<Value>, JsonApiError> {
    let items = records
        .into_iter()
        .map(|r| Into::<Object>::into(r).to_public_json())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(Value::Array(items)))
}

/// Body of a successful delete.
pub(crate) fn empty() -> Json<Value> {
    Json(Value::Object(Default::default()))
}

async fn not_found(method: Method, uri: Uri) -> JsonApiError {
    debug!(%method, %uri, "no route");
    JsonApiError::not_found()
}

fn api_v1(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats))
        .route("/states", get(states::list).post(states::create))
        .route("/states/:id", get(states::get).put(states::update).delete(states::delete))
        .route("/states/:id/cities", get(cities::list_by_state).post(cities::create))
        .route("/cities/:id", get(cities::get).put(cities::update).delete(cities::delete))
        .route("/amenities", get(amenities::list).post(amenities::create))
        .route("/amenities/:id", get(amenities::get).put(amenities::update).delete(amenities::delete))
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/cities/:id/places", get(places::list_by_city).post(places::create))
        .route("/places/:id", get(places::get).put(places::update).delete(places::delete))
        .route("/places/:id/reviews", get(reviews::list_by_place).post(reviews::create))
        .route("/reviews/:id", get(reviews::get).put(reviews::update).delete(reviews::delete))
        .route("/places/:id/amenities", get(place_amenities::list))
        .route(
            "/places/:id/amenities/:amenity_id",
            post(place_amenities::link).delete(place_amenities::unlink),
        )
        .layer(middleware::from_fn_with_state(state, refresh_store))
}

/// Build the full application router over `state`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/api-docs/openapi.json", get(ops::openapi))
        .nest("/api/v1", api_v1(state.clone()))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
