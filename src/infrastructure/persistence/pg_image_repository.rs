use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ImageRepository, RepositoryError};
use crate::domain::{ImageId, ImageRecord, OwnerId, ProcessingStatus, StoragePath};

pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: Uuid,
    owner_id: String,
    image_path: String,
    caption: Option<String>,
    uploaded_at: DateTime<Utc>,
    status: String,
}

impl TryFrom<ImageRow> for ImageRecord {
    type Error = RepositoryError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<ProcessingStatus>()
            .map_err(RepositoryError::CorruptRow)?;
        let owner = OwnerId::parse(&row.owner_id)
            .ok_or_else(|| RepositoryError::CorruptRow(format!("blank owner on {}", row.id)))?;

        Ok(ImageRecord {
            id: ImageId::from_uuid(row.id),
            owner,
            image: StoragePath::from_raw(row.image_path),
            caption: row.caption,
            uploaded_at: row.uploaded_at,
            status,
        })
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self, record), fields(image_id = %record.id))]
    async fn create(&self, record: &ImageRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO images (id, owner_id, image_path, caption, uploaded_at, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.owner.as_str())
        .bind(record.image.as_str())
        .bind(record.caption.as_deref())
        .bind(record.uploaded_at)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, record), fields(image_id = %record.id, status = %record.status))]
    async fn update(&self, record: &ImageRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE images
            SET caption = $1, status = $2
            WHERE id = $3
            "#,
        )
        .bind(record.caption.as_deref())
        .bind(record.status.as_str())
        .bind(record.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(record.id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, owner), fields(image_id = %id))]
    async fn get_for_owner(
        &self,
        id: ImageId,
        owner: &OwnerId,
    ) -> Result<Option<ImageRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT id, owner_id, image_path, caption, uploaded_at, status
            FROM images
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(ImageRecord::try_from).transpose()
    }

    #[instrument(skip(self, owner))]
    async fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<ImageRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT id, owner_id, image_path, caption, uploaded_at, status
            FROM images
            WHERE owner_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(ImageRecord::try_from).collect()
    }

    #[instrument(skip(self, owner), fields(image_id = %id))]
    async fn delete_for_owner(
        &self,
        id: ImageId,
        owner: &OwnerId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1 AND owner_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
