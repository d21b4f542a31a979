use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use async_trait::async_trait;
use common::metrics::{STORE_RELOADS_TOTAL, STORE_SAVES_TOTAL, STORE_SAVE_DURATION};
use models::{ClassName, Object};
use serde_json::{Map, Value};
use tokio::{
    fs,
    sync::{Mutex, RwLock},
};
use tracing::{debug, info, warn};

use crate::errors::ServiceError;
use crate::storage::{Mutation, Storage};

/// JSON file-backed object store.
///
/// Holds every object in memory keyed by `"<ClassName>.<id>"` and dumps the
/// whole registry to a single JSON document on [`Storage::save`]. The file is
/// read back wholesale by [`Storage::reload`].
pub struct FileStorage {
    objects: RwLock<BTreeMap<String, Object>>,
    file_path: PathBuf,
    // One writer at a time, so an older snapshot never lands after a newer one.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Empty store bound to `path`; nothing is read.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            objects: RwLock::new(BTreeMap::new()),
            file_path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store bound to `path`, populated from the file when it exists.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        let store = Self::new(path);
        if let Some(parent) = store.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.ok();
        }
        let loaded = store.reload().await;
        info!(path = %store.file_path.display(), count = loaded, "object store opened");
        Arc::new(store)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn read_file(&self) -> Option<Map<String, Value>> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no backing file; nothing to reload");
                return None;
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "backing file unreadable; keeping registry");
                return None;
            }
        };
        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "backing file is not a JSON object; keeping registry");
                None
            }
        }
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn all(&self, class: Option<ClassName>) -> BTreeMap<String, Object> {
        let objects = self.objects.read().await;
        match class {
            None => objects.clone(),
            Some(class) => objects
                .iter()
                .filter(|(_, obj)| obj.class() == class)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    async fn get(&self, class_name: &str, id: &str) -> Option<Object> {
        let class = ClassName::from_str(class_name).ok()?;
        let objects = self.objects.read().await;
        objects.get(&class.key(id)).cloned()
    }

    async fn count(&self, class: Option<ClassName>) -> usize {
        let objects = self.objects.read().await;
        match class {
            None => objects.len(),
            Some(class) => objects.values().filter(|obj| obj.class() == class).count(),
        }
    }

    async fn insert(&self, obj: Object) {
        let key = obj.key();
        debug!(%key, "register object");
        let mut objects = self.objects.write().await;
        objects.insert(key, obj);
    }

    async fn delete(&self, obj: &Object) -> bool {
        let key = obj.key();
        let mut objects = self.objects.write().await;
        let existed = objects.remove(&key).is_some();
        debug!(%key, existed, "delete object");
        existed
    }

    async fn modify(&self, class: ClassName, id: &str, f: Mutation) -> Result<Option<Object>, ServiceError> {
        let mut objects = self.objects.write().await;
        let Some(slot) = objects.get_mut(&class.key(id)) else {
            return Ok(None);
        };
        let mut updated = slot.clone();
        f(&mut updated)?;
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let _writer = self.write_lock.lock().await;
        let _timer = STORE_SAVE_DURATION.start_timer();
        let data = {
            let objects = self.objects.read().await;
            let mut dump = Map::with_capacity(objects.len());
            for (key, obj) in objects.iter() {
                dump.insert(key.clone(), Value::Object(obj.to_dict()?));
            }
            serde_json::to_vec(&dump).map_err(|e| ServiceError::Storage(e.to_string()))?
        };
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("{}: {e}", self.file_path.display())))?;
        STORE_SAVES_TOTAL.inc();
        debug!(path = %self.file_path.display(), "object store saved");
        Ok(())
    }

    async fn reload(&self) -> usize {
        let Some(entries) = self.read_file().await else {
            return 0;
        };
        let mut loaded = BTreeMap::new();
        for (key, value) in entries {
            let Value::Object(dict) = value else {
                warn!(%key, "skipping entry that is not an object");
                continue;
            };
            match Object::from_dict(dict) {
                Ok(obj) => {
                    if obj.key() != key {
                        warn!(%key, actual = %obj.key(), "entry key does not match its class and id; using the latter");
                    }
                    loaded.insert(obj.key(), obj);
                }
                Err(e) => warn!(%key, error = %e, "skipping unreadable entry"),
            }
        }
        let count = loaded.len();
        let mut objects = self.objects.write().await;
        objects.extend(loaded);
        STORE_RELOADS_TOTAL.inc();
        debug!(path = %self.file_path.display(), count, "object store reloaded");
        count
    }
}
