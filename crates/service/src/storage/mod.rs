//! Storage abstractions for the service layer
//!
//! `Storage` is the object store seam: a keyed registry of [`Object`]s under
//! `"<ClassName>.<id>"` with explicit, whole-collection persistence.
//! Lookups never fail; absence is `None` or an empty map.

pub mod file_storage;

use std::collections::BTreeMap;
use std::str::FromStr;

use async_trait::async_trait;
use models::{ClassName, Model, Object};

use crate::errors::ServiceError;

/// In-place mutation applied by [`Storage::modify`].
pub type Mutation = Box<dyn FnOnce(&mut Object) -> Result<(), ServiceError> + Send>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Every stored object, or only those of `class`.
    async fn all(&self, class: Option<ClassName>) -> BTreeMap<String, Object>;

    /// Register `obj` under its composite key, replacing any previous entry.
    /// Not persisted until [`Storage::save`].
    async fn insert(&self, obj: Object);

    /// Remove `obj`'s entry; returns whether it was present.
    async fn delete(&self, obj: &Object) -> bool;

    /// Mutate the stored object in place. Returns the updated object, or
    /// `None` when nothing is stored under that key. A failing mutation
    /// leaves the entry unchanged.
    async fn modify(&self, class: ClassName, id: &str, f: Mutation) -> Result<Option<Object>, ServiceError>;

    /// Overwrite the backing medium with the full registry.
    async fn save(&self) -> Result<(), ServiceError>;

    /// Merge the persisted registry into memory. A missing or unreadable
    /// backing medium leaves the registry as it is. Returns how many objects
    /// were loaded.
    async fn reload(&self) -> usize;

    /// Post-request refresh: re-reads the backing medium.
    async fn refresh(&self) -> usize {
        self.reload().await
    }

    /// Filter by class name; unknown names yield an empty map.
    async fn all_by_name(&self, class_name: &str) -> BTreeMap<String, Object> {
        match ClassName::from_str(class_name) {
            Ok(class) => self.all(Some(class)).await,
            Err(_) => BTreeMap::new(),
        }
    }

    /// Resolve `class_name` and look up `"<class_name>.<id>"`. Unknown class
    /// names and missing ids both yield `None`.
    async fn get(&self, class_name: &str, id: &str) -> Option<Object> {
        let class = ClassName::from_str(class_name).ok()?;
        self.all(Some(class)).await.remove(&class.key(id))
    }

    /// Same as `all(class).len()`.
    async fn count(&self, class: Option<ClassName>) -> usize {
        self.all(class).await.len()
    }

    /// Register when present; absent objects are ignored.
    async fn insert_opt(&self, obj: Option<Object>) {
        if let Some(obj) = obj {
            self.insert(obj).await;
        }
    }
}

/// Typed lookup by id.
pub async fn find<M: Model>(store: &dyn Storage, id: &str) -> Option<M> {
    store.get(M::CLASS.as_str(), id).await.and_then(M::from_object)
}

/// Every stored object of `M`'s class, in key order.
pub async fn list<M: Model>(store: &dyn Storage) -> Vec<M> {
    store
        .all(Some(M::CLASS))
        .await
        .into_values()
        .filter_map(M::from_object)
        .collect()
}
