use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;
use service::catalog::Attributes;

use crate::errors::JsonApiError;

/// Request body that must be a JSON object sent as `application/json`.
/// Anything else is rejected with 400 `Not a JSON`.
pub struct JsonObject(pub Attributes);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(&req) {
            return Err(JsonApiError::not_a_json());
        }
        let bytes = Bytes::from_request(req, state).await.map_err(|_| JsonApiError::not_a_json())?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(JsonObject(map)),
            _ => Err(JsonApiError::not_a_json()),
        }
    }
}
