use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ImageStoreError;
use crate::application::services::{GalleryError, IngestionError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub(super) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

impl IntoResponse for IngestionError {
    fn into_response(self) -> Response {
        match &self {
            IngestionError::Validation(e) => {
                tracing::warn!(error = %e, "Upload rejected");
                error_response(StatusCode::BAD_REQUEST, e.to_string())
            }
            IngestionError::Storage(_) | IngestionError::Repository(_) => {
                tracing::error!(error = %self, "Upload failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store image")
            }
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        match &self {
            GalleryError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Not found."),
            GalleryError::Storage(ImageStoreError::NotFound(path)) => {
                tracing::warn!(path = %path, "Record exists but its stored image is missing");
                error_response(StatusCode::NOT_FOUND, "Not found.")
            }
            GalleryError::BlankCaption => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            GalleryError::Repository(_) | GalleryError::Storage(_) => {
                tracing::error!(error = %self, "Gallery request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Gallery request failed")
            }
        }
    }
}
