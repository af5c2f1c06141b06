use async_trait::async_trait;

use crate::domain::{ImageId, ImageRecord, OwnerId};

use super::RepositoryError;

/// Durable store for image records. Every read is scoped to an owner.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn create(&self, record: &ImageRecord) -> Result<(), RepositoryError>;

    /// Writes the mutable fields (`caption`, `status`) of an existing record.
    async fn update(&self, record: &ImageRecord) -> Result<(), RepositoryError>;

    async fn get_for_owner(
        &self,
        id: ImageId,
        owner: &OwnerId,
    ) -> Result<Option<ImageRecord>, RepositoryError>;

    /// Newest first.
    async fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<ImageRecord>, RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_for_owner(&self, id: ImageId, owner: &OwnerId)
    -> Result<bool, RepositoryError>;
}
