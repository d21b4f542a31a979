//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Prepare the directory of the backing file; a missing file is only logged.
pub async fn ensure_env(file_path: &Path) -> anyhow::Result<()> {
    common::env::ensure_storage_path(file_path).await
}
