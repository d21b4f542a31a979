use models::{Amenity, ClassName, Object, Place};
use tracing::info;

use crate::catalog::{crud, relations};
use crate::errors::ServiceError;
use crate::storage::Storage;

/// Outcome of linking an amenity to a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Created,
    AlreadyLinked,
}

pub async fn list(store: &dyn Storage, place_id: &str) -> Result<Vec<Amenity>, ServiceError> {
    let place: Place = crud::get(store, place_id).await?;
    Ok(relations::amenities_of(store, &place).await)
}

/// Link `amenity_id` to `place_id`. Both must exist; linking twice is not
/// an error.
pub async fn link(store: &dyn Storage, place_id: &str, amenity_id: &str) -> Result<(Amenity, Link), ServiceError> {
    let place: Place = crud::get(store, place_id).await?;
    let amenity: Amenity = crud::get(store, amenity_id).await?;
    if place.has_amenity(amenity_id) {
        return Ok((amenity, Link::AlreadyLinked));
    }
    let id = amenity_id.to_string();
    store
        .modify(
            ClassName::Place,
            place_id,
            Box::new(move |obj: &mut Object| -> Result<(), ServiceError> {
                if let Object::Place(p) = obj {
                    p.link_amenity(&id);
                    p.base.touch();
                }
                Ok(())
            }),
        )
        .await?
        .ok_or_else(|| ServiceError::not_found(ClassName::Place))?;
    store.save().await?;
    info!(%place_id, %amenity_id, "amenity linked");
    Ok((amenity, Link::Created))
}

/// Remove the link. The place, the amenity and the link itself must exist.
pub async fn unlink(store: &dyn Storage, place_id: &str, amenity_id: &str) -> Result<(), ServiceError> {
    let place: Place = crud::get(store, place_id).await?;
    crud::get::<Amenity>(store, amenity_id).await?;
    if !place.has_amenity(amenity_id) {
        return Err(ServiceError::NotFound(format!("Amenity {amenity_id} not linked to Place {place_id}")));
    }
    let id = amenity_id.to_string();
    store
        .modify(
            ClassName::Place,
            place_id,
            Box::new(move |obj: &mut Object| -> Result<(), ServiceError> {
                if let Object::Place(p) = obj {
                    p.unlink_amenity(&id);
                    p.base.touch();
                }
                Ok(())
            }),
        )
        .await?;
    store.save().await?;
    info!(%place_id, %amenity_id, "amenity unlinked");
    Ok(())
}
