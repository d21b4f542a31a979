use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::base::BaseModel;
use crate::errors::ModelError;

/// A catalog user. `password` holds an argon2 PHC string once set through
/// [`User::set_password`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            email: email.into(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            extra: Map::new(),
        }
    }

    /// Hash and store a plain-text password.
    pub fn set_password(&mut self, plain: &str) -> Result<(), ModelError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| ModelError::Password(e.to_string()))?
            .to_string();
        self.password = hash;
        Ok(())
    }

    pub fn verify_password(&self, plain: &str) -> bool {
        match PasswordHash::new(&self.password) {
            Ok(parsed) => Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_stored_hashed_and_verifies() -> anyhow::Result<()> {
        let mut user = User::new("bob@example.com");
        user.set_password("S3curePass!")?;
        assert_ne!(user.password, "S3curePass!");
        assert!(user.password.starts_with("$argon2"));
        assert!(user.verify_password("S3curePass!"));
        assert!(!user.verify_password("wrong"));
        Ok(())
    }

    #[test]
    fn unhashed_password_never_verifies() {
        let mut user = User::new("bob@example.com");
        user.password = "plain".into();
        assert!(!user.verify_password("plain"));
    }
}
