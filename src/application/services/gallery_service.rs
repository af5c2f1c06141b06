use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{ImageRepository, ImageStore, ImageStoreError, RepositoryError};
use crate::domain::{ImageId, ImageRecord, OwnerId};

/// Owner-scoped reads, manual caption edits and deletion.
pub struct GalleryService {
    repository: Arc<dyn ImageRepository>,
    image_store: Arc<dyn ImageStore>,
}

impl GalleryService {
    pub fn new(repository: Arc<dyn ImageRepository>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            repository,
            image_store,
        }
    }

    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<ImageRecord>, GalleryError> {
        Ok(self.repository.list_for_owner(owner).await?)
    }

    pub async fn get(&self, owner: &OwnerId, id: ImageId) -> Result<ImageRecord, GalleryError> {
        self.repository
            .get_for_owner(id, owner)
            .await?
            .ok_or(GalleryError::NotFound(id))
    }

    pub async fn image_bytes(
        &self,
        owner: &OwnerId,
        id: ImageId,
    ) -> Result<(ImageRecord, Bytes), GalleryError> {
        let record = self.get(owner, id).await?;
        let data = self.image_store.fetch(&record.image).await?;
        Ok((record, data))
    }

    pub async fn edit_caption(
        &self,
        owner: &OwnerId,
        id: ImageId,
        caption: &str,
    ) -> Result<ImageRecord, GalleryError> {
        let mut record = self.get(owner, id).await?;
        if !record.edit_caption(caption) {
            return Err(GalleryError::BlankCaption);
        }
        self.repository.update(&record).await?;
        tracing::info!(image_id = %id, "Caption edited");
        Ok(record)
    }

    pub async fn delete(&self, owner: &OwnerId, id: ImageId) -> Result<(), GalleryError> {
        let record = self.get(owner, id).await?;
        if !self.repository.delete_for_owner(id, owner).await? {
            return Err(GalleryError::NotFound(id));
        }
        if let Err(e) = self.image_store.delete(&record.image).await {
            tracing::warn!(
                error = %e,
                path = %record.image,
                "Failed to delete stored image for removed record"
            );
        }
        tracing::info!(image_id = %id, "Image deleted");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("image not found: {0}")]
    NotFound(ImageId),
    #[error("caption must not be blank")]
    BlankCaption,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("image storage: {0}")]
    Storage(#[from] ImageStoreError),
}
