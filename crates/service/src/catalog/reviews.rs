use models::{ClassName, Place, Review, User};

use crate::catalog::{crud, relations, Attributes};
use crate::errors::ServiceError;
use crate::storage::{self, Storage};

/// Reviews of an existing place.
pub async fn list_by_place(store: &dyn Storage, place_id: &str) -> Result<Vec<Review>, ServiceError> {
    crud::get::<Place>(store, place_id).await?;
    Ok(relations::reviews_of(store, place_id).await)
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<Review, ServiceError> {
    crud::get(store, id).await
}

/// Create a review of `place_id`. Requires `user_id` and `text`; the place
/// and the author must exist.
pub async fn create(store: &dyn Storage, place_id: &str, attrs: Attributes) -> Result<Review, ServiceError> {
    if storage::find::<Place>(store, place_id).await.is_none() {
        return Err(ServiceError::not_found(ClassName::Place));
    }
    crud::require(&attrs, &["user_id", "text"])?;
    let author = crud::reference(&attrs, "user_id").unwrap_or_default();
    if storage::find::<User>(store, author).await.is_none() {
        return Err(ServiceError::not_found(ClassName::User));
    }
    crud::create_with(store, attrs, |review: &mut Review| {
        review.place_id = place_id.to_string();
        Ok(())
    })
    .await
}

/// `user_id` and `place_id` cannot be changed here.
pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<Review, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<Review>(store, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::Model;
    use serde_json::json;

    fn attrs(v: serde_json::Value) -> Attributes {
        v.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn review_checks_place_fields_then_author() -> anyhow::Result<()> {
        let (store, path) = temp_store("reviews_create").await;
        let user = User::new("guest@example.com");
        let place = Place::new("c1", user.id(), "Loft");
        store.insert(user.clone().into()).await;
        store.insert(place.clone().into()).await;

        let res = create(store.as_ref(), "nope", attrs(json!({"user_id": user.id(), "text": "ok"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        let err = create(store.as_ref(), place.id(), attrs(json!({"user_id": user.id()}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing text");
        let res = create(store.as_ref(), place.id(), attrs(json!({"user_id": "ghost", "text": "ok"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let review = create(store.as_ref(), place.id(), attrs(json!({"user_id": user.id(), "text": "Cozy"}))).await?;
        assert_eq!(review.place_id, place.id());
        let listed = list_by_place(store.as_ref(), place.id()).await?;
        assert_eq!(listed, vec![review.clone()]);

        let edited = update(store.as_ref(), review.id(), attrs(json!({"text": "Very cozy", "place_id": "x"}))).await?;
        assert_eq!(edited.text, "Very cozy");
        assert_eq!(edited.place_id, place.id());
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_author_place_and_creation_time() -> anyhow::Result<()> {
        let (store, path) = temp_store("reviews_update").await;
        let review = Review::new("p1", "u1", "Fine");
        store.insert(review.clone().into()).await;

        let updated = update(
            store.as_ref(),
            review.id(),
            attrs(json!({
                "user_id": "u2",
                "place_id": "p2",
                "id": "forged",
                "created_at": "2000-01-01T00:00:00.000000",
                "text": "Better than fine"
            })),
        )
        .await?;
        assert_eq!(updated.base.id, review.base.id);
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.place_id, "p1");
        assert_eq!(updated.base.created_at, review.base.created_at);
        assert_eq!(updated.text, "Better than fine");

        let stored = get(store.as_ref(), review.id()).await?;
        assert_eq!(stored, updated);
        cleanup(&path).await;
        Ok(())
    }
}
