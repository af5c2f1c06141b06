use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ImageRepository, RepositoryError};
use crate::domain::{ImageId, ImageRecord, OwnerId};

/// Process-local repository used when no database URL is configured.
#[derive(Default)]
pub struct InMemoryImageRepository {
    records: RwLock<HashMap<ImageId, ImageRecord>>,
}

impl InMemoryImageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn create(&self, record: &ImageRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::QueryFailed(format!(
                "duplicate image id {}",
                record.id
            )));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn update(&self, record: &ImageRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let stored = records
            .get_mut(&record.id)
            .ok_or_else(|| RepositoryError::NotFound(record.id.to_string()))?;
        stored.caption = record.caption.clone();
        stored.status = record.status;
        Ok(())
    }

    async fn get_for_owner(
        &self,
        id: ImageId,
        owner: &OwnerId,
    ) -> Result<Option<ImageRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&id).filter(|r| &r.owner == owner).cloned())
    }

    async fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<ImageRecord>, RepositoryError> {
        let records = self.records.read().await;
        let mut owned: Vec<ImageRecord> = records
            .values()
            .filter(|r| &r.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(owned)
    }

    async fn delete_for_owner(
        &self,
        id: ImageId,
        owner: &OwnerId,
    ) -> Result<bool, RepositoryError> {
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(r) if &r.owner == owner => {
                records.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
