mod image_id;
mod image_record;
mod image_upload;
mod owner_id;
mod processing_status;
mod storage_path;

pub use image_id::ImageId;
pub use image_record::ImageRecord;
pub use image_upload::{ImagePayload, RawUpload};
pub use owner_id::OwnerId;
pub use processing_status::ProcessingStatus;
pub use storage_path::StoragePath;
