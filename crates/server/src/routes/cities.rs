use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::cities;

use crate::errors::JsonApiError;
use crate::extract::JsonObject;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/states/{id}/cities", tag = "cities", params(("id" = String, Path, description = "State id")), responses((status = 200, description = "Cities of the state", body = [crate::openapi::CityDoc]), (status = 404, description = "Not found")))]
pub async fn list_by_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    public_list(cities::list_by_state(state.store.as_ref(), &state_id).await?)
}

#[utoipa::path(post, path = "/api/v1/states/{id}/cities", tag = "cities", params(("id" = String, Path, description = "State id")), request_body = crate::openapi::NamedInput, responses((status = 201, description = "Created", body = crate::openapi::CityDoc), (status = 400, description = "Not a JSON / Missing name"), (status = 404, description = "Not found")))]
pub async fn create(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = cities::create(state.store.as_ref(), &state_id, attrs).await?;
    Ok((StatusCode::CREATED, public(created)?))
}

#[utoipa::path(get, path = "/api/v1/cities/{id}", tag = "cities", params(("id" = String, Path, description = "City id")), responses((status = 200, description = "The city", body = crate::openapi::CityDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public(cities::get(state.store.as_ref(), &id).await?)
}

#[utoipa::path(put, path = "/api/v1/cities/{id}", tag = "cities", params(("id" = String, Path, description = "City id")), request_body = crate::openapi::NamedInput, responses((status = 200, description = "Updated", body = crate::openapi::CityDoc), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    public(cities::update(state.store.as_ref(), &id, attrs).await?)
}

#[utoipa::path(delete, path = "/api/v1/cities/{id}", tag = "cities", params(("id" = String, Path, description = "City id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    cities::delete(state.store.as_ref(), &id).await?;
    Ok(empty())
}
