use std::sync::Arc;

use crate::application::services::{GalleryService, IngestionService};

#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<IngestionService>,
    pub gallery_service: Arc<GalleryService>,
    pub max_upload_bytes: usize,
}
