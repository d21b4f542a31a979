use models::User;

use crate::catalog::{crud, Attributes};
use crate::errors::ServiceError;
use crate::storage::Storage;

pub async fn list(store: &dyn Storage) -> Vec<User> {
    crud::list(store).await
}

pub async fn get(store: &dyn Storage, id: &str) -> Result<User, ServiceError> {
    crud::get(store, id).await
}

/// Requires `email` and `password`; the password is stored hashed.
pub async fn create(store: &dyn Storage, attrs: Attributes) -> Result<User, ServiceError> {
    crud::require(&attrs, &["email", "password"])?;
    let plain = crud::reference(&attrs, "password")
        .ok_or_else(|| ServiceError::Validation("password must be a string".into()))?
        .to_string();
    crud::create_with(store, attrs, move |user: &mut User| {
        user.set_password(&plain)?;
        Ok(())
    })
    .await
}

/// `email` and `password` cannot be changed here.
pub async fn update(store: &dyn Storage, id: &str, attrs: Attributes) -> Result<User, ServiceError> {
    crud::update(store, id, attrs).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), ServiceError> {
    crud::delete::<User>(store, id).await
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
    async fn email_then_password_are_required() -> anyhow::Result<()> {
        let (store, path) = temp_store("users_required").await;
        let err = create(store.as_ref(), attrs(json!({"password": "x"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing email");
        let err = create(store.as_ref(), attrs(json!({"email": "a@b.c"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing password");
        let err = create(store.as_ref(), attrs(json!({"email": "a@b.c", "password": 12345678}))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn credentials_survive_updates() -> anyhow::Result<()> {
        let (store, path) = temp_store("users_update").await;
        let user = create(store.as_ref(), attrs(json!({"email": "a@b.c", "password": "pw-123456", "first_name": "Ann"}))).await?;
        assert!(user.verify_password("pw-123456"));

        let updated = update(
            store.as_ref(),
            user.id(),
            attrs(json!({"email": "evil@b.c", "password": "hijack", "last_name": "Lee"})),
        )
        .await?;
        assert_eq!(updated.email, "a@b.c");
        assert_eq!(updated.last_name, "Lee");
        assert_eq!(updated.first_name, "Ann");
        assert!(updated.verify_password("pw-123456"));
        cleanup(&path).await;
        Ok(())
    }
}
