use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    ImageCaptioner, ImageRepository, ImageStore, ImageStoreError, RepositoryError,
};
use crate::domain::{ImageRecord, OwnerId, ProcessingStatus, RawUpload, StoragePath};

use super::upload_decoder::{UploadError, decode_upload, ensure_image_content};

/// Upload-to-caption pipeline. Runs to a terminal status inside the calling
/// request: `PENDING -> PROCESSING -> COMPLETED | FAILED`.
pub struct IngestionService {
    repository: Arc<dyn ImageRepository>,
    image_store: Arc<dyn ImageStore>,
    captioner: Arc<dyn ImageCaptioner>,
}

impl IngestionService {
    pub fn new(
        repository: Arc<dyn ImageRepository>,
        image_store: Arc<dyn ImageStore>,
        captioner: Arc<dyn ImageCaptioner>,
    ) -> Self {
        Self {
            repository,
            image_store,
            captioner,
        }
    }

    /// Only validation, storage and the initial insert can fail the request.
    /// Once the record exists every captioning problem ends in `FAILED`
    /// rather than an error.
    pub async fn ingest(
        &self,
        owner: OwnerId,
        upload: RawUpload,
    ) -> Result<ImageRecord, IngestionError> {
        let payload = decode_upload(upload)?;
        let format = ensure_image_content(&payload)?;

        let mut record = ImageRecord::new(owner, &payload.filename);
        let size = self
            .image_store
            .put(&record.image, payload.data)
            .await
            .map_err(IngestionError::Storage)?;

        tracing::debug!(
            image_id = %record.id,
            path = %record.image,
            format = ?format,
            bytes = size,
            "Image stored"
        );

        if let Err(e) = self.repository.create(&record).await {
            self.discard_stored_image(&record.image).await;
            return Err(IngestionError::Repository(e));
        }

        let span = tracing::info_span!(
            "ingestion",
            image_id = %record.id,
            owner = %record.owner,
        );
        self.caption_record(&mut record).instrument(span).await?;

        Ok(record)
    }

    async fn caption_record(&self, record: &mut ImageRecord) -> Result<(), IngestionError> {
        record.start_processing();
        if let Err(e) = self.persist(record).await {
            tracing::error!(error = %e, "Failed to persist PROCESSING status");
            return self.persist_failure(record).await;
        }

        let caption = match self.captioner.caption(&record.image).await {
            Ok(outcome) => {
                tracing::debug!(outcome = ?outcome, "Captioning finished");
                outcome.into_caption()
            }
            Err(e) => {
                tracing::error!(error = %e, "Caption generation failed");
                None
            }
        };
        record.finish(caption);

        if let Err(e) = self.persist(record).await {
            if record.status == ProcessingStatus::Failed {
                return Err(e);
            }
            tracing::error!(error = %e, "Failed to persist COMPLETED status");
            return self.persist_failure(record).await;
        }

        tracing::info!(status = %record.status, "Ingestion finished");
        Ok(())
    }

    async fn persist_failure(&self, record: &mut ImageRecord) -> Result<(), IngestionError> {
        record.fail();
        self.persist(record).await?;
        tracing::info!(status = %record.status, "Ingestion finished");
        Ok(())
    }

    async fn persist(&self, record: &ImageRecord) -> Result<(), IngestionError> {
        tracing::debug!(status = %record.status, "Image status transition");
        self.repository
            .update(record)
            .await
            .map_err(IngestionError::Repository)
    }

    async fn discard_stored_image(&self, path: &StoragePath) {
        if let Err(e) = self.image_store.delete(path).await {
            tracing::warn!(
                error = %e,
                path = %path,
                "Failed to delete stored image after record creation failed"
            );
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("invalid upload: {0}")]
    Validation(#[from] UploadError),
    #[error("image storage: {0}")]
    Storage(ImageStoreError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
