use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<u64, ImageStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, ImageStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), ImageStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
