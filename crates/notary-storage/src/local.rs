use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory files are stored in (e.g., "uploads")
    /// * `base_url` - Base URL for serving files (e.g., "http://127.0.0.1:8000/file")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert a file name to a filesystem path with security validation
    ///
    /// Names must be a single path component: anything containing a
    /// separator or `..` is rejected so caller-supplied names cannot escape
    /// the storage directory.
    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty()
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StorageError::InvalidName(
                "File name must be a single path component".to_string(),
            ));
        }

        Ok(self.base_path.join(name))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn save(&self, name: &str, data: Vec<u8>) -> StorageResult<String> {
        let path = self.name_to_path(name)?;
        let size = data.len();

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.url_for(name);

        tracing::info!(
            path = %path.display(),
            name = %name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage save successful"
        );

        Ok(url)
    }

    async fn load(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.name_to_path(name)?;
        let start = std::time::Instant::now();

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(name.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            name = %name,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage load successful"
        );

        Ok(data)
    }

    async fn exists(&self, name: &str) -> StorageResult<bool> {
        let path = self.name_to_path(name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn test_storage(dir: &tempfile::TempDir) -> LocalStorage {
        LocalStorage::new(dir.path(), "http://127.0.0.1:8000/file".to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_local_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = test_storage(&dir).await;

        let data = b"test data".to_vec();
        let url = storage.save("scan.png", data.clone()).await.unwrap();

        assert_eq!(url, "http://127.0.0.1:8000/file/scan.png");

        let loaded = storage.load("scan.png").await.unwrap();
        assert_eq!(data, loaded);
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = test_storage(&dir).await;

        let result = storage.load("../../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidName(_))));

        let result = storage.save("../escape.txt", b"x".to_vec()).await;
        assert!(matches!(result, Err(StorageError::InvalidName(_))));

        let result = storage.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidName(_))));

        let result = storage.exists("").await;
        assert!(matches!(result, Err(StorageError::InvalidName(_))));
    }

    #[tokio::test]
    async fn test_local_storage_load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = test_storage(&dir).await;

        let result = storage.load("nonexistent.txt").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_local_storage_exists() {
        let dir = tempdir().unwrap();
        let storage = test_storage(&dir).await;

        storage.save("exists.txt", b"test".to_vec()).await.unwrap();

        assert!(storage.exists("exists.txt").await.unwrap());
        assert!(!storage.exists("nonexistent.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_url_for_trims_trailing_slash() {
        let dir = tempdir().unwrap();
        let storage =
            LocalStorage::new(dir.path(), "http://127.0.0.1:8000/generated/".to_string())
                .await
                .unwrap();

        assert_eq!(
            storage.url_for("doc.txt"),
            "http://127.0.0.1:8000/generated/doc.txt"
        );
    }
}
