//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Stored records are free-form JSON objects on the wire; the schemas below
//! describe their typed fields only.

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String }

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct StatsDoc {
    pub amenities: usize,
    pub cities: usize,
    pub places: usize,
    pub reviews: usize,
    pub states: usize,
    pub users: usize,
}

#[derive(ToSchema)]
pub struct NamedInput { pub name: String }

#[derive(ToSchema)]
pub struct UserInput {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// `email` and `password` are ignored on update.
#[derive(ToSchema)]
pub struct UserUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct PlaceInput {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(ToSchema)]
pub struct ReviewInput { pub user_id: String, pub text: String }

#[derive(ToSchema)]
pub struct StateDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct CityDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub state_id: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct AmenityDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(ToSchema)]
pub struct PlaceDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub city_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub number_rooms: i64,
    pub number_bathrooms: i64,
    pub max_guest: i64,
    pub price_by_night: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub amenity_ids: Vec<String>,
}

#[derive(ToSchema)]
pub struct ReviewDoc {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub place_id: String,
    pub user_id: String,
    pub text: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ops::health,
        crate::routes::index::status,
        crate::routes::index::stats,
        crate::routes::states::list,
        crate::routes::states::get,
        crate::routes::states::create,
        crate::routes::states::update,
        crate::routes::states::delete,
        crate::routes::cities::list_by_state,
        crate::routes::cities::create,
        crate::routes::cities::get,
        crate::routes::cities::update,
        crate::routes::cities::delete,
        crate::routes::amenities::list,
        crate::routes::amenities::get,
        crate::routes::amenities::create,
        crate::routes::amenities::update,
        crate::routes::amenities::delete,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::places::list_by_city,
        crate::routes::places::create,
        crate::routes::places::get,
        crate::routes::places::update,
        crate::routes::places::delete,
        crate::routes::reviews::list_by_place,
        crate::routes::reviews::create,
        crate::routes::reviews::get,
        crate::routes::reviews::update,
        crate::routes::reviews::delete,
        crate::routes::place_amenities::list,
        crate::routes::place_amenities::link,
        crate::routes::place_amenities::unlink,
    ),
    components(
        schemas(
            HealthDoc,
            StatusDoc,
            StatsDoc,
            NamedInput,
            UserInput,
            UserUpdateInput,
            PlaceInput,
            ReviewInput,
            StateDoc,
            CityDoc,
            AmenityDoc,
            UserDoc,
            PlaceDoc,
            ReviewDoc,
        )
    ),
    tags(
        (name = "ops"),
        (name = "index"),
        (name = "states"),
        (name = "cities"),
        (name = "amenities"),
        (name = "users"),
        (name = "places"),
        (name = "reviews")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::PathItemType;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/states"));
        assert!(doc.paths.paths.contains_key("/api/v1/places/{id}/amenities/{amenity_id}"));
        for collection in ["states", "cities", "amenities", "users", "places", "reviews"] {
            let item = doc.paths.paths.get(&format!("/api/v1/{collection}/{{id}}"));
            let item = item.unwrap_or_else(|| panic!("{collection} item path missing"));
            for (method, label) in [
                (PathItemType::Get, "Get"),
                (PathItemType::Put, "Put"),
                (PathItemType::Delete, "Delete"),
            ] {
                assert!(item.operations.contains_key(&method), "{collection} lacks {label}");
            }
        }
    }
}
