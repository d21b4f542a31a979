use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::catalog::place_amenities::{self, Link};

use crate::errors::JsonApiError;
use crate::routes::{empty, public, public_list};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/places/{id}/amenities", tag = "places", params(("id" = String, Path, description = "Place id")), responses((status = 200, description = "Amenities linked to the place", body = [crate::openapi::AmenityDoc]), (status = 404, description = "Not found")))]
pub async fn list(State(state): State<AppState>, Path(place_id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    public_list(place_amenities::list(state.store.as_ref(), &place_id).await?)
}

/// 201 when the link is new, 200 when it already existed.
#[utoipa::path(post, path = "/api/v1/places/{id}/amenities/{amenity_id}", tag = "places", params(("id" = String, Path, description = "Place id"), ("amenity_id" = String, Path, description = "Amenity id")), responses((status = 201, description = "Linked", body = crate::openapi::AmenityDoc), (status = 200, description = "Already linked", body = crate::openapi::AmenityDoc), (status = 404, description = "Not found")))]
pub async fn link(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let (amenity, outcome) = place_amenities::link(state.store.as_ref(), &place_id, &amenity_id).await?;
    let status = match outcome {
        Link::Created => StatusCode::CREATED,
        Link::AlreadyLinked => StatusCode::OK,
    };
    Ok((status, public(amenity)?))
}

#[utoipa::path(delete, path = "/api/v1/places/{id}/amenities/{amenity_id}", tag = "places", params(("id" = String, Path, description = "Place id"), ("amenity_id" = String, Path, description = "Amenity id")), responses((status = 200, description = "Unlinked"), (status = 404, description = "Place, amenity or link not found")))]
pub async fn unlink(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<Json<Value>, JsonApiError> {
    place_amenities::unlink(state.store.as_ref(), &place_id, &amenity_id).await?;
    Ok(empty())
}
