mod caption_service;
mod gallery_service;
mod ingestion_service;
mod upload_decoder;

pub use caption_service::{CaptionService, Captioning, ExhaustedPolicy, PLACEHOLDER_CAPTION};
pub use gallery_service::{GalleryError, GalleryService};
pub use ingestion_service::{IngestionError, IngestionService};
pub use upload_decoder::{
    BASE64_DELIMITER, DATA_URL_PREFIX, UploadError, decode_data_url, decode_upload,
    ensure_image_content,
};
