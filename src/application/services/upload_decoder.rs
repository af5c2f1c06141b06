use base64::{Engine as _, engine::general_purpose};
use image::ImageFormat;
use uuid::Uuid;

use crate::domain::{ImagePayload, RawUpload};

pub const DATA_URL_PREFIX: &str = "data:image";
pub const BASE64_DELIMITER: &str = ";base64,";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("expected an embedded image starting with 'data:image'")]
    NotADataUrl,
    #[error("invalid image format or corrupt data: expected exactly one ';base64,' delimiter")]
    MissingDelimiter,
    #[error("invalid image format or corrupt data: no MIME subtype in '{0}'")]
    MissingSubtype(String),
    #[error("invalid image format or corrupt data: {0}")]
    InvalidBase64(String),
    #[error("the submitted file is empty")]
    Empty,
    #[error("upload is not a recognized image")]
    NotAnImage,
}

/// Normalizes an upload into bytes plus a filename. Binary uploads pass
/// through untouched; embedded uploads are decoded from their data URL.
pub fn decode_upload(upload: RawUpload) -> Result<ImagePayload, UploadError> {
    match upload {
        RawUpload::Binary { filename, data } => Ok(ImagePayload { filename, data }),
        RawUpload::Embedded(text) => decode_data_url(&text),
    }
}

/// Decodes `data:image/<subtype>;base64,<payload>` and names the result
/// `<uuid>.<subtype>`.
pub fn decode_data_url(data_url: &str) -> Result<ImagePayload, UploadError> {
    if !data_url.starts_with(DATA_URL_PREFIX) {
        return Err(UploadError::NotADataUrl);
    }

    let mut segments = data_url.split(BASE64_DELIMITER);
    let (Some(header), Some(payload), None) = (segments.next(), segments.next(), segments.next())
    else {
        return Err(UploadError::MissingDelimiter);
    };

    let subtype = match header.rsplit_once('/') {
        Some((_, subtype)) if !subtype.trim().is_empty() => subtype.trim(),
        _ => return Err(UploadError::MissingSubtype(header.to_string())),
    };

    let data = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| UploadError::InvalidBase64(e.to_string()))?;

    Ok(ImagePayload {
        filename: format!("{}.{}", Uuid::new_v4(), subtype),
        data: data.into(),
    })
}

/// Rejects payloads whose leading bytes carry no known image signature.
pub fn ensure_image_content(payload: &ImagePayload) -> Result<ImageFormat, UploadError> {
    if payload.data.is_empty() {
        return Err(UploadError::Empty);
    }
    image::guess_format(&payload.data).map_err(|_| UploadError::NotAnImage)
}
