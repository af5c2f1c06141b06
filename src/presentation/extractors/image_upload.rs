use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::domain::RawUpload;
use crate::presentation::handlers::ErrorResponse;

pub const IMAGE_FIELD: &str = "image";

/// Upload body in either of the accepted shapes:
/// `multipart/form-data` with an `image` field (a file part or a data URL
/// text part), or JSON `{"image": "data:image/...;base64,..."}`.
#[derive(Debug)]
pub struct ImageUpload(pub RawUpload);

#[derive(Deserialize)]
struct EmbeddedUploadBody {
    image: String,
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(body) = Json::<EmbeddedUploadBody>::from_request(req, state)
                .await
                .map_err(|e| bad_request(format!("Invalid upload body: {}", e.body_text())))?;
            return Ok(Self(RawUpload::Embedded(body.image)));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(f)) => f,
                Ok(None) => return Err(bad_request("No image uploaded")),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read multipart");
                    return Err(bad_request(format!("Failed to read multipart: {}", e)));
                }
            };

            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            let Some(filename) = field.file_name().map(str::to_string) else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read image field: {}", e)))?;
                return Ok(Self(RawUpload::Embedded(text)));
            };

            let data = field
                .bytes()
                .await
                .map_err(|e| bad_request(format!("Failed to read file: {}", e)))?;

            tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
            return Ok(Self(RawUpload::Binary { filename, data }));
        }
    }
}
