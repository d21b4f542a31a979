use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::base::BaseModel;

/// A city; `state_id` references the owning `State`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub state_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl City {
    pub fn new(state_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { base: BaseModel::new(), state_id: state_id.into(), name: name.into(), extra: Map::new() }
    }
}
