use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timestamp;

/// Attributes every stored record carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "timestamp::now", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "timestamp::now", with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl BaseModel {
    pub fn new() -> Self {
        let now = timestamp::now();
        Self { id: new_id(), created_at: now, updated_at: now }
    }

    /// Mark the record as modified.
    pub fn touch(&mut self) {
        self.updated_at = timestamp::now();
    }
}

impl Default for BaseModel {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_get_distinct_ids_and_equal_timestamps() {
        let a = BaseModel::new();
        let b = BaseModel::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn touch_moves_updated_at_forward_only() {
        let mut base = BaseModel::new();
        let created = base.created_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        base.touch();
        assert_eq!(base.created_at, created);
        assert!(base.updated_at > created);
    }
}
