use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ImageId, ImageRecord};
use crate::presentation::extractors::{AuthenticatedOwner, ImageUpload};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: String,
    pub owner: String,
    pub image: String,
    pub caption: Option<String>,
    pub uploaded_at: String,
    pub status: String,
}

impl From<&ImageRecord> for ImageResponse {
    fn from(record: &ImageRecord) -> Self {
        Self {
            id: record.id.to_string(),
            owner: record.owner.to_string(),
            image: format!("/api/v1/gallery/{}/image", record.id),
            caption: record.caption.clone(),
            uploaded_at: record.uploaded_at.to_rfc3339(),
            status: record.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCaptionRequest {
    pub caption: String,
}

fn parse_image_id(raw: &str) -> Result<ImageId, Response> {
    Uuid::parse_str(raw)
        .map(ImageId::from_uuid)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, format!("Invalid image ID: {}", raw)))
}

#[tracing::instrument(skip(state, owner, upload), fields(owner = %owner))]
pub async fn upload_image_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    ImageUpload(upload): ImageUpload,
) -> Response {
    match state.ingestion_service.ingest(owner, upload).await {
        Ok(record) => {
            tracing::info!(
                image_id = %record.id,
                status = %record.status,
                "Image upload processed"
            );
            (StatusCode::CREATED, Json(ImageResponse::from(&record))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, owner), fields(owner = %owner))]
pub async fn list_images_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> Response {
    match state.gallery_service.list(&owner).await {
        Ok(records) => {
            let body: Vec<ImageResponse> = records.iter().map(ImageResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, owner), fields(owner = %owner))]
pub async fn get_image_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(image_id): Path<String>,
) -> Response {
    let id = match parse_image_id(&image_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.gallery_service.get(&owner, id).await {
        Ok(record) => (StatusCode::OK, Json(ImageResponse::from(&record))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, owner, body), fields(owner = %owner))]
pub async fn update_caption_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(image_id): Path<String>,
    Json(body): Json<UpdateCaptionRequest>,
) -> Response {
    let id = match parse_image_id(&image_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .gallery_service
        .edit_caption(&owner, id, &body.caption)
        .await
    {
        Ok(record) => (StatusCode::OK, Json(ImageResponse::from(&record))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, owner), fields(owner = %owner))]
pub async fn delete_image_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(image_id): Path<String>,
) -> Response {
    let id = match parse_image_id(&image_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.gallery_service.delete(&owner, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, owner), fields(owner = %owner))]
pub async fn image_file_handler(
    State(state): State<AppState>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(image_id): Path<String>,
) -> Response {
    let id = match parse_image_id(&image_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.gallery_service.image_bytes(&owner, id).await {
        Ok((_, data)) => {
            let mime = image::guess_format(&data)
                .map(|f| f.to_mime_type())
                .unwrap_or("application/octet-stream");
            (StatusCode::OK, [(CONTENT_TYPE, mime)], data).into_response()
        }
        Err(e) => e.into_response(),
    }
}
