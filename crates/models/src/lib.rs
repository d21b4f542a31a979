//! Model layer: the catalog records and their key/value representation.
//!
//! Every record embeds a [`base::BaseModel`] (id and timestamps), a set of
//! typed class fields and a map of free-form attributes. [`Object`] is the
//! sum type the store holds; its `__class__` tag selects the variant when a
//! record is rebuilt from its serialized form.

pub mod errors;
pub mod timestamp;
pub mod base;
pub mod class;
pub mod object;
pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use base::BaseModel;
pub use class::ClassName;
pub use object::{Model, Object, CLASS_TAG};
pub use amenity::Amenity;
pub use city::City;
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;
