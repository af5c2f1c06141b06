use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;

use crate::domain::OwnerId;
use crate::presentation::handlers::ErrorResponse;

/// Header the upstream auth gateway sets to the authenticated user.
pub const AUTHENTICATED_USER_HEADER: &str = "x-authenticated-user";

#[derive(Debug, Clone)]
pub struct AuthenticatedOwner(pub OwnerId);

impl<S> FromRequestParts<S> for AuthenticatedOwner
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHENTICATED_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(OwnerId::parse)
            .map(AuthenticatedOwner)
            .ok_or_else(|| {
                tracing::warn!("Request without authenticated user");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("Authentication credentials were not provided")),
                )
            })
    }
}
