mod error_response;
mod gallery;
mod health;

pub use error_response::ErrorResponse;
pub use gallery::{
    ImageResponse, UpdateCaptionRequest, delete_image_handler, get_image_handler,
    image_file_handler, list_images_handler, update_caption_handler, upload_image_handler,
};
pub use health::health_handler;
