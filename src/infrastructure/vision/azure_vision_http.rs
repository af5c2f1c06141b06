use bytes::Bytes;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::application::ports::ProviderUnavailable;

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Posts raw image bytes to an Azure Vision endpoint and decodes the JSON body.
/// Network faults and schema mismatches are kept apart so the logs show which
/// one happened.
pub(super) async fn post_image<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
    image: Bytes,
) -> Result<T, ProviderUnavailable> {
    let response = client
        .post(url)
        .header(SUBSCRIPTION_KEY_HEADER, api_key)
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(image)
        .send()
        .await
        .map_err(classify)?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderUnavailable::ErrorStatus { status, body });
    }

    let body = response.bytes().await.map_err(classify)?;
    serde_json::from_slice(&body).map_err(|e| ProviderUnavailable::MalformedResponse(e.to_string()))
}

fn classify(e: reqwest::Error) -> ProviderUnavailable {
    if e.is_timeout() {
        ProviderUnavailable::TimedOut
    } else {
        ProviderUnavailable::RequestFailed(e.to_string())
    }
}

/// A present, non-empty text field is an answer, returned trimmed. Text that
/// trims to nothing stays an answer and fails the record downstream instead of
/// moving on to the next contract.
pub(super) fn answered_caption(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(|t| t.trim().to_string())
}
