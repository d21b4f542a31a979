#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use crate::storage::file_storage::FileStorage;

/// Unique backing-file path under the system temp dir.
pub fn temp_file(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}

/// Fresh store on a temp file that does not exist yet.
pub async fn temp_store(prefix: &str) -> (Arc<FileStorage>, PathBuf) {
    let path = temp_file(prefix);
    (FileStorage::open(&path).await, path)
}

pub async fn cleanup(path: &PathBuf) {
    let _ = tokio::fs::remove_file(path).await;
}
