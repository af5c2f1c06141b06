use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ImageStore, ImageStoreError};
use crate::domain::StoragePath;

pub struct ObjectImageStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectImageStore {
    /// Stores images on disk under `base_path`, creating it if needed.
    pub fn local(base_path: PathBuf) -> Result<Self, ImageStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ImageStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ImageStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }
}

#[async_trait::async_trait]
impl ImageStore for ObjectImageStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<u64, ImageStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len() as u64;
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ImageStoreError::UploadFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, ImageStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ImageStoreError::NotFound(path.to_string()),
            other => ImageStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| ImageStoreError::DownloadFailed(e.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), ImageStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| ImageStoreError::DeleteFailed(e.to_string()))
    }
}
