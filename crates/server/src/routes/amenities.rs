use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::amenities;

use crate::errors::JsonApiError;
use crate::extract::JsonObject;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/amenities", tag = "amenities", responses((status = 200, description = "Every amenity", body = [crate::openapi::AmenityDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    public_list(amenities::list(state.store.as_ref()).await)
}

#[utoipa::path(get, path = "/api/v1/amenities/{id}", tag = "amenities", params(("id" = String, Path, description = "Amenity id")), responses((status = 200, description = "The amenity", body = crate::openapi::AmenityDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public(amenities::get(state.store.as_ref(), &id).await?)
}

#[utoipa::path(post, path = "/api/v1/amenities", tag = "amenities", request_body = crate::openapi::NamedInput, responses((status = 201, description = "Created", body = crate::openapi::AmenityDoc), (status = 400, description = "Not a JSON / Missing name")))]
pub async fn create(
    State(state): State<AppState>,
    JsonObject(attrs): JsonObject,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = amenities::create(state.store.as_ref(), attrs).await?;
    Ok((StatusCode::CREATED, public(created)?))
}

#[utoipa::path(put, path = "/api/v1/amenities/{id}", tag = "amenities", params(("id" = String, Path, description = "Amenity id")), request_body = crate::openapi::NamedInput, responses((status = 200, description = "Updated", body = crate::openapi::AmenityDoc), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    public(amenities::update(state.store.as_ref(), &id, attrs).await?)
}

#[utoipa::path(delete, path = "/api/v1/amenities/{id}", tag = "amenities", params(("id" = String, Path, description = "Amenity id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    amenities::delete(state.store.as_ref(), &id).await?;
    Ok(empty())
}
