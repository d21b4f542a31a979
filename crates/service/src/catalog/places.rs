use models::{City, ClassName, Place, User};

use crate::catalog::{crud, relations, Attributes};
use crate::errors::ServiceError;
use crate::storage::{self, Storage};

/// Places of an existing city.
pub async fn list_by_city(store: &dyn Storage, city_id: &str) -> Result<Vec<Place>, ServiceError> {
    crud::get::<City>(store, city_id).await?;
    Ok(relations::places_of(store, city_id).await)
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<Place, ServiceError> {
    crud::get(store, id).await
}

/// Create a place in `city_id`. Requires `user_id` and `name`; both the city
/// and the referenced user must exist.
pub async fn create(store: &dyn Storage, city_id: &str, attrs: Attributes) -> Result<Place, ServiceError> {
    if storage::find::<City>(store, city_id).await.is_none() {
        return Err(ServiceError::not_found(ClassName::City));
    }
    crud::require(&attrs, &["user_id", "name"])?;
    let owner = crud::reference(&attrs, "user_id").unwrap_or_default();
    if storage::find::<User>(store, owner).await.is_none() {
        return Err(ServiceError::not_found(ClassName::User));
    }
    crud::create_with(store, attrs, |place: &mut Place| {
        place.city_id = city_id.to_string();
        Ok(())
    })
    .await
}

/// `user_id` and `city_id` cannot be changed here.
pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<Place, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<Place>(store, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::{Model, State};
    use serde_json::json;

    fn attrs(v: serde_json::Value) -> Attributes {
        v.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn place_requires_an_existing_city_and_owner() -> anyhow::Result<()> {
        let (store, path) = temp_store("places_create").await;
        let state = State::new("California");
        let city = City::new(state.id(), "San Francisco");
        let user = User::new("host@example.com");
        store.insert(state.into()).await;
        store.insert(city.clone().into()).await;
        store.insert(user.clone().into()).await;

        let res = create(store.as_ref(), "nope", attrs(json!({"user_id": user.id(), "name": "Loft"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let err = create(store.as_ref(), city.id(), attrs(json!({"name": "Loft"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing user_id");
        let err = create(store.as_ref(), city.id(), attrs(json!({"user_id": user.id()}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing name");

        let res = create(store.as_ref(), city.id(), attrs(json!({"user_id": "ghost", "name": "Loft"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let place = create(
            store.as_ref(),
            city.id(),
            attrs(json!({"user_id": user.id(), "name": "Loft", "number_rooms": 2, "price_by_night": 120})),
        )
        .await?;
        assert_eq!(place.city_id, city.id());
        assert_eq!(place.number_rooms, 2);
        assert_eq!(list_by_city(store.as_ref(), city.id()).await?.len(), 1);
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_ownership_and_rejects_bad_types() -> anyhow::Result<()> {
        let (store, path) = temp_store("places_update").await;
        let place = Place::new("c1", "u1", "Loft");
        store.insert(place.clone().into()).await;

        let updated = update(
            store.as_ref(),
            place.id(),
            attrs(json!({"user_id": "u2", "city_id": "c2", "max_guest": 4, "description": "Sunny"})),
        )
        .await?;
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.city_id, "c1");
        assert_eq!(updated.max_guest, 4);

        let res = update(store.as_ref(), place.id(), attrs(json!({"latitude": "north"}))).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        assert_eq!(get(store.as_ref(), place.id()).await?.description, "Sunny");
        cleanup(&path).await;
        Ok(())
    }
}
