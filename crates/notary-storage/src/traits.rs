//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// A `Storage` is a capability over exactly one artifact directory. Handlers
/// receive the instances they need instead of reaching for shared constants,
/// which keeps the two directories (uploads, generated documents) isolated
/// from each other.
///
/// **Name format:** a flat file name (`{id}.png`, `{id}_qr.png`, ...). Names
/// containing path separators or `..` are rejected.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a file under `name` and return its public URL.
    ///
    /// Names embed freshly generated identifiers, so an existing file is
    /// never expected; if one exists it is overwritten.
    async fn save(&self, name: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read a file back by name. `NotFound` when no such file exists.
    async fn load(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Check if a file exists
    async fn exists(&self, name: &str) -> StorageResult<bool>;

    /// Public URL for a (not necessarily existing) file name.
    fn url_for(&self, name: &str) -> String;
}
