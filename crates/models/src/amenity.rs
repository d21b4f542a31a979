use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::base::BaseModel;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { base: BaseModel::new(), name: name.into(), extra: Map::new() }
    }
}
