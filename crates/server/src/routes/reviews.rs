use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::reviews;

use crate::errors::JsonApiError;
use crate::extract::JsonObject;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/places/{id}/reviews", tag = "reviews", params(("id" = String, Path, description = "Place id")), responses((status = 200, description = "Reviews of the place", body = [crate::openapi::ReviewDoc]), (status = 404, description = "Not found")))]
pub async fn list_by_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    public_list(reviews::list_by_place(state.store.as_ref(), &place_id).await?)
}

#[utoipa::path(post, path = "/api/v1/places/{id}/reviews", tag = "reviews", params(("id" = String, Path, description = "Place id")), request_body = crate::openapi::ReviewInput, responses((status = 201, description = "Created", body = crate::openapi::ReviewDoc), (status = 400, description = "Not a JSON / Missing user_id / Missing text"), (status = 404, description = "Place or user not found")))]
pub async fn create(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = reviews::create(state.store.as_ref(), &place_id, attrs).await?;
    Ok((StatusCode::CREATED, public(created)?))
}

#[utoipa::path(get, path = "/api/v1/reviews/{id}", tag = "reviews", params(("id" = String, Path, description = "Review id")), responses((status = 200, description = "The review", body = crate::openapi::ReviewDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public(reviews::get(state.store.as_ref(), &id).await?)
}

#[utoipa::path(put, path = "/api/v1/reviews/{id}", tag = "reviews", params(("id" = String, Path, description = "Review id")), request_body = crate::openapi::ReviewInput, responses((status = 200, description = "Updated", body = crate::openapi::ReviewDoc), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    public(reviews::update(state.store.as_ref(), &id, attrs).await?)
}

#[utoipa::path(delete, path = "/api/v1/reviews/{id}", tag = "reviews", params(("id" = String, Path, description = "Review id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    reviews::delete(state.store.as_ref(), &id).await?;
    Ok(empty())
}
