use models::Amenity;

use crate::catalog::{crud, Attributes};
use crate::errors::ServiceError;
use crate::storage::Storage;

pub async fn list(store: &dyn Storage) -> Vec<Amenity> {
    crud::list(store).await
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<Amenity, ServiceError> {
    crud::get(store, id).await
}

/// Requires `name`.
pub async fn create(store: &dyn Storage, attrs: Attributes) -> Result<Amenity, ServiceError> {
    crud::require(&attrs, &["name"])?;
    crud::create(store, attrs).await
}

pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<Amenity, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<Amenity>(store, id).await
}
