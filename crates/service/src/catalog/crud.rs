use models::{Model, Object};
use tracing::info;

use crate::catalog::Attributes;
use crate::errors::ServiceError;
use crate::storage::{self, Storage};

/// First field of `required` absent from `attrs`, as a `Missing <field>` error.
pub fn require(attrs: &Attributes, required: &[&str]) -> Result<(), ServiceError> {
    match required.iter().find(|f| !attrs.contains_key(**f)) {
        Some(field) => Err(ServiceError::missing(field)),
        None => Ok(()),
    }
}

/// String value of a reference attribute such as `user_id`.
pub fn reference<'a>(attrs: &'a Attributes, field: &str) -> Option<&'a str> {
    attrs.get(field).and_then(|v| v.as_str())
}

pub async fn list<M: Model>(store: &dyn Storage) -> Vec<M> {
    storage::list(store).await
}

pub async fn get<M: Model>(store: &dyn Storage, id: &str) -> Result<M, ServiceError> {
    storage::find(store, id).await.ok_or_else(|| ServiceError::not_found(M::CLASS))
}

fn typed<M: Model>(obj: Object) -> Result<M, ServiceError> {
    let class = obj.class();
    M::from_object(obj).ok_or_else(|| ServiceError::Validation(format!("expected {}, found {class}", M::CLASS)))
}

/// Build a new `M` from `attrs`, let `prepare` finish it, register and save.
pub async fn create_with<M, F>(store: &dyn Storage, attrs: Attributes, prepare: F) -> Result<M, ServiceError>
where
    M: Model,
    F: FnOnce(&mut M) -> Result<(), ServiceError>,
{
    let mut record: M = typed(Object::build(M::CLASS, attrs)?)?;
    prepare(&mut record)?;
    store.insert(record.clone().into()).await;
    store.save().await?;
    info!(class = %M::CLASS, id = %record.id(), "created");
    Ok(record)
}

pub async fn create<M: Model>(store: &dyn Storage, attrs: Attributes) -> Result<M, ServiceError> {
    create_with(store, attrs, |_: &mut M| Ok(())).await
}

/// Assign `attrs` onto the stored `M` (immutable fields are ignored) and save.
pub async fn update<M: Model>(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<M, ServiceError> {
    let updated = store
        .modify(M::CLASS, id, Box::new(move |obj: &mut Object| obj.apply_attributes(&attrs).map_err(ServiceError::from)))
        .await?
        .ok_or_else(|| ServiceError::not_found(M::CLASS))?;
    store.save().await?;
    info!(class = %M::CLASS, %id, "updated");
    typed(updated)
}

pub async fn delete<M: Model>(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    let record: M = get(store, id).await?;
    store.delete(&record.into()).await;
    store.save().await?;
    info!(class = %M::CLASS, %id, "deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::State;
    use serde_json::json;

    fn attrs(v: serde_json::Value) -> Attributes {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn require_reports_the_first_missing_field() {
        let a = attrs(json!({"email": "x"}));
        assert!(require(&a, &["email"]).is_ok());
        let err = require(&a, &["email", "password"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing password");
    }

    #[test]
    fn reference_requires_a_string() {
        let a = attrs(json!({"user_id": 7, "city_id": "c1"}));
        assert_eq!(reference(&a, "user_id"), None);
        assert_eq!(reference(&a, "city_id"), Some("c1"));
    }

    #[tokio::test]
    async fn create_persists_and_update_keeps_identity() -> anyhow::Result<()> {
        let (store, path) = temp_store("crud_cycle").await;
        let created: State = create(store.as_ref(), attrs(json!({"name": "Nevada"}))).await?;
        assert!(tokio::fs::metadata(&path).await.is_ok());

        let updated: State = update(store.as_ref(), created.id(), attrs(json!({"name": "Oregon", "id": "x"}))).await?;
        assert_eq!(updated.base.id, created.base.id);
        assert_eq!(updated.name, "Oregon");
        assert_eq!(updated.base.created_at, created.base.created_at);

        delete::<State>(store.as_ref(), created.id()).await?;
        assert!(matches!(get::<State>(store.as_ref(), created.id()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete::<State>(store.as_ref(), created.id()).await, Err(ServiceError::NotFound(_))));
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_not_found() -> anyhow::Result<()> {
        let (store, path) = temp_store("crud_missing").await;
        let res = update::<State>(store.as_ref(), "nope", attrs(json!({"name": "x"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        cleanup(&path).await;
        Ok(())
    }
}
