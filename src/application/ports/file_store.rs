use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Writes `data` at `path`, replacing any previous content. Returns the
    /// number of bytes written.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, FileStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, FileStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
