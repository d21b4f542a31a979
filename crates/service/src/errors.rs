use models::ClassName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(class: ClassName) -> Self { Self::NotFound(format!("{} not found", class)) }

    /// A required attribute was absent from the request body.
    pub fn missing(field: &str) -> Self { Self::Validation(format!("Missing {field}")) }
}
