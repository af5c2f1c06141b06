mod authenticated_owner;
mod image_upload;

pub use authenticated_owner::{AUTHENTICATED_USER_HEADER, AuthenticatedOwner};
pub use image_upload::{IMAGE_FIELD, ImageUpload};
