//! Environment/runtime helpers
//!
//! Sanity checks run before the store is opened.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the directory holding the backing file exists; warn when the file
/// itself is missing, since the store then starts empty.
pub async fn ensure_storage_path(file_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    if tokio::fs::metadata(file_path).await.is_err() {
        warn!(path = %file_path.display(), "backing file not found; starting with an empty store");
    } else {
        info!(path = %file_path.display(), "backing file found");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent_directory() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("catalog_env_{}", uuid::Uuid::new_v4()));
        let file = dir.join("nested").join("file.json");
        ensure_storage_path(&file).await?;
        assert!(tokio::fs::metadata(dir.join("nested")).await?.is_dir());
        assert!(tokio::fs::metadata(&file).await.is_err());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() -> anyhow::Result<()> {
        ensure_storage_path(Path::new("catalog-env-test-missing.json")).await?;
        Ok(())
    }
}
