use models::State;

use crate::catalog::{crud, Attributes};
use crate::errors::ServiceError;
use crate::storage::Storage;

pub async fn list(store: &dyn Storage) -> Vec<State> {
    crud::list(store).await
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<State, ServiceError> {
    crud::get(store, id).await
}

/// Requires `name`.
pub async fn create(store: &dyn Storage, attrs: Attributes) -> Result<State, ServiceError> {
    crud::require(&attrs, &["name"])?;
    crud::create(store, attrs).await
}

pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<State, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<State>(store, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::Model;
    use serde_json::json;

    #[tokio::test]
    async fn california_lifecycle() -> anyhow::Result<()> {
        let (store, path) = temp_store("states_lifecycle").await;
        let attrs = json!({"name": "California"}).as_object().cloned().unwrap_or_default();
        let created = create(store.as_ref(), attrs).await?;

        let fetched = get(store.as_ref(), created.id()).await?;
        assert_eq!(fetched.name, "California");
        assert_eq!(list(store.as_ref()).await.len(), 1);

        delete(store.as_ref(), created.id()).await?;
        assert!(matches!(get(store.as_ref(), created.id()).await, Err(ServiceError::NotFound(_))));
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn name_is_required() -> anyhow::Result<()> {
        let (store, path) = temp_store("states_missing").await;
        let err = create(store.as_ref(), Attributes::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing name");
        assert!(list(store.as_ref()).await.is_empty());
        cleanup(&path).await;
        Ok(())
    }
}
