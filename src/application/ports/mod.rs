mod caption_provider;
mod image_captioner;
mod image_repository;
mod image_store;
mod repository_error;

pub use caption_provider::{CaptionProvider, ProviderOutcome, ProviderUnavailable};
pub use image_captioner::{CaptionError, CaptionOutcome, ImageCaptioner};
pub use image_repository::ImageRepository;
pub use image_store::{ImageStore, ImageStoreError};
pub use repository_error::RepositoryError;
