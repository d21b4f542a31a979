use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::places;

use crate::errors::JsonApiError;
use crate::extract::JsonObject;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/cities/{id}/places", tag = "places", params(("id" = String, Path, description = "City id")), responses((status = 200, description = "Places in the city", body = [crate::openapi::PlaceDoc]), (status = 404, description = "Not found")))]
pub async fn list_by_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    public_list(places::list_by_city(state.store.as_ref(), &city_id).await?)
}

#[utoipa::path(post, path = "/api/v1/cities/{id}/places", tag = "places", params(("id" = String, Path, description = "City id")), request_body = crate::openapi::PlaceInput, responses((status = 201, description = "Created", body = crate::openapi::PlaceDoc), (status = 400, description = "Not a JSON / Missing user_id / Missing name"), (status = 404, description = "City or user not found")))]
pub async fn create(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = places::create(state.store.as_ref(), &city_id, attrs).await?;
    Ok((StatusCode::CREATED, public(created)?))
}

#[utoipa::path(get, path = "/api/v1/places/{id}", tag = "places", params(("id" = String, Path, description = "Place id")), responses((status = 200, description = "The place", body = crate::openapi::PlaceDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public(places::get(state.store.as_ref(), &id).await?)
}

#[utoipa::path(put, path = "/api/v1/places/{id}", tag = "places", params(("id" = String, Path, description = "Place id")), request_body = crate::openapi::PlaceInput, responses((status = 200, description = "Updated", body = crate::openapi::PlaceDoc), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    public(places::update(state.store.as_ref(), &id, attrs).await?)
}

#[utoipa::path(delete, path = "/api/v1/places/{id}", tag = "places", params(("id" = String, Path, description = "Place id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    places::delete(state.store.as_ref(), &id).await?;
    Ok(empty())
}
