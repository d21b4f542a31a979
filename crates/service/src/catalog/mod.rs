//! Catalog services: per-resource business rules over a [`Storage`].
//!
//! Every mutating operation persists the whole store before returning, so a
//! successful call is durable once it returns.
//!
//! [`Storage`]: crate::storage::Storage

pub mod crud;
pub mod relations;
pub mod states;
pub mod cities;
pub mod amenities;
pub mod users;
pub mod places;
pub mod reviews;
pub mod place_amenities;
pub mod stats;

/// Client supplied attributes, i.e. the JSON object of a request body.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
