use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::users;

use crate::errors::JsonApiError;
use crate::extract::JsonObject;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

// Responses never carry the password hash; see `Object::to_public_json`.

#[utoipa::path(get, path = "/api/v1/users", tag = "users", responses((status = 200, description = "Every user", body = [crate::openapi::UserDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    public_list(users::list(state.store.as_ref()).await)
}

#[utoipa::path(get, path = "/api/v1/users/{id}", tag = "users", params(("id" = String, Path, description = "User id")), responses((status = 200, description = "The user", body = crate::openapi::UserDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public(users::get(state.store.as_ref(), &id).await?)
}

#[utoipa::path(post, path = "/api/v1/users", tag = "users", request_body = crate::openapi::UserInput, responses((status = 201, description = "Created", body = crate::openapi::UserDoc), (status = 400, description = "Not a JSON / Missing email / Missing password")))]
pub async fn create(
    State(state): State<AppState>,
    JsonObject(attrs): JsonObject,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = users::create(state.store.as_ref(), attrs).await?;
    Ok((StatusCode::CREATED, public(created)?))
}

#[utoipa::path(put, path = "/api/v1/users/{id}", tag = "users", params(("id" = String, Path, description = "User id")), request_body = crate::openapi::UserUpdateInput, responses((status = 200, description = "Updated", body = crate::openapi::UserDoc), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(attrs): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    public(users::update(state.store.as_ref(), &id, attrs).await?)
}

#[utoipa::path(delete, path = "/api/v1/users/{id}", tag = "users", params(("id" = String, Path, description = "User id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    users::delete(state.store.as_ref(), &id).await?;
    Ok(empty())
}
