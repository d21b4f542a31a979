use models::{City, ClassName, State};

use crate::catalog::{crud, relations, Attributes};
use crate::errors::ServiceError;
use crate::storage::{self, Storage};

/// Cities of an existing state.
pub async fn list_by_state(store: &dyn Storage, state_id: &str) -> Result<Vec<City>, ServiceError> {
    crud::get::<State>(store, state_id).await?;
    Ok(relations::cities_of(store, state_id).await)
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<City, ServiceError> {
    crud::get(store, id).await
}

/// Create a city inside `state_id`. The state must exist; `name` is required.
pub async fn create(store: &dyn Storage, state_id: &str, attrs: Attributes) -> Result<City, ServiceError> {
    if storage::find::<State>(store, state_id).await.is_none() {
        return Err(ServiceError::not_found(ClassName::State));
    }
    crud::require(&attrs, &["name"])?;
    crud::create_with(store, attrs, |city: &mut City| {
        city.state_id = state_id.to_string();
        Ok(())
    })
    .await
}

pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<City, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<City>(store, id).await
}
