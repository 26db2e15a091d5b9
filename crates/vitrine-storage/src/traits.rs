//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends implement.

use async_trait::async_trait;
use thiserror::Error;
use vitrine_core::models::Category;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Files are addressed by `(category, filename)`; the filename is expected to
/// already be a generated name from `naming::generated_filename`. Backends
/// must reject filenames containing path separators or traversal sequences.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create the category's directory (and parents) if absent. Idempotent.
    async fn ensure_category_dir(&self, category: Category) -> StorageResult<()>;

    /// Write a file under the category directory and return its storage key
    /// (`uploads/<category>/<filename>`).
    async fn save(
        &self,
        category: Category,
        filename: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Remove a file. Missing files are a hard `NotFound` error: callers
    /// deleting an item must know when its files are already gone.
    async fn delete(&self, category: Category, filename: &str) -> StorageResult<()>;

    /// Check whether a file exists.
    async fn exists(&self, category: Category, filename: &str) -> StorageResult<bool>;
}
