use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use vitrine_core::models::Category;

use crate::naming;
use crate::traits::{Storage, StorageError, StorageResult};

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `root`
    /// (e.g. "uploads" or "/var/lib/vitrine/uploads").
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload root {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage { root })
    }

    /// Resolve `(category, filename)` to a filesystem path, rejecting
    /// filenames that could escape the category directory.
    fn file_path(&self, category: Category, filename: &str) -> StorageResult<PathBuf> {
        naming::validate_filename(filename)?;
        Ok(self.root.join(category.upload_dir()).join(filename))
    }

    fn category_path(&self, category: Category) -> PathBuf {
        self.root.join(category.upload_dir())
    }

    async fn file_exists(path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn ensure_category_dir(&self, category: Category) -> StorageResult<()> {
        let path = self.category_path(category);
        fs::create_dir_all(&path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create category directory {}: {}",
                path.display(),
                e
            ))
        })
    }

    async fn save(
        &self,
        category: Category,
        filename: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let path = self.file_path(category, filename)?;
        let size = data.len();

        self.ensure_category_dir(category).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let key = naming::storage_key(category, filename);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage save successful"
        );

        Ok(key)
    }

    async fn delete(&self, category: Category, filename: &str) -> StorageResult<()> {
        let path = self.file_path(category, filename)?;
        let start = std::time::Instant::now();

        if !Self::file_exists(&path).await {
            return Err(StorageError::NotFound(
                naming::storage_key(category, filename),
            ));
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            category = %category,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(())
    }

    async fn exists(&self, category: Category, filename: &str) -> StorageResult<bool> {
        let path = self.file_path(category, filename)?;
        Ok(Self::file_exists(&path).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_exists() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let key = storage
            .save(Category::Products, "1-photo.png", b"png bytes".to_vec())
            .await
            .unwrap();

        assert_eq!(key, "uploads/products/1-photo.png");
        assert!(storage
            .exists(Category::Products, "1-photo.png")
            .await
            .unwrap());
        assert!(!storage
            .exists(Category::Articles, "1-photo.png")
            .await
            .unwrap());

        let on_disk = std::fs::read(dir.path().join("products/1-photo.png")).unwrap();
        assert_eq!(on_disk, b"png bytes");
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .save(Category::Qna, "1-a.png", b"data".to_vec())
            .await
            .unwrap();
        storage.delete(Category::Qna, "1-a.png").await.unwrap();

        assert!(!storage.exists(Category::Qna, "1-a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage.delete(Category::Products, "missing.png").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage
            .save(Category::Products, "../escape.png", b"x".to_vec())
            .await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));

        let result = storage.delete(Category::Products, "a/../../b.png").await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));

        let result = storage.exists(Category::Products, "nested/name.png").await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));
    }

    #[tokio::test]
    async fn test_ensure_category_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage.ensure_category_dir(Category::Articles).await.unwrap();
        storage.ensure_category_dir(Category::Articles).await.unwrap();

        assert!(dir.path().join("articles").is_dir());
    }
}
