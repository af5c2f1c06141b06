use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{CaptionProvider, ProviderOutcome, ProviderUnavailable};

use super::azure_vision_http::{answered_caption, post_image};

pub const API_VERSION: &str = "2023-10-01";

/// Image Analysis 4.0 `caption` feature.
pub struct AzureImageAnalysisProvider {
    client: Client,
    url: String,
    api_key: String,
}

impl AzureImageAnalysisProvider {
    pub fn new(client: Client, endpoint: &str, api_key: &str) -> Self {
        let url = format!(
            "{}/computervision/imageanalysis:analyze?api-version={}&features=caption&language=en&model-version=latest",
            endpoint.trim_end_matches('/'),
            API_VERSION,
        );
        Self {
            client,
            url,
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(rename = "captionResult")]
    caption_result: Option<CaptionResult>,
}

#[derive(Deserialize)]
struct CaptionResult {
    text: Option<String>,
    confidence: Option<f64>,
}

#[async_trait]
impl CaptionProvider for AzureImageAnalysisProvider {
    fn name(&self) -> &'static str {
        "azure-image-analysis-v4"
    }

    async fn caption(&self, image: Bytes) -> ProviderOutcome {
        tracing::debug!(bytes = image.len(), "Requesting caption from Image Analysis 4.0");

        let response: AnalyzeResponse =
            match post_image(&self.client, &self.url, &self.api_key, image).await {
                Ok(r) => r,
                Err(reason) => return ProviderOutcome::Unavailable(reason),
            };

        let Some(result) = response.caption_result else {
            return ProviderOutcome::Unavailable(ProviderUnavailable::NoCaption);
        };

        match answered_caption(result.text) {
            Some(text) => {
                tracing::debug!(confidence = ?result.confidence, "Image Analysis caption received");
                ProviderOutcome::Success(text)
            }
            None => ProviderOutcome::Unavailable(ProviderUnavailable::NoCaption),
        }
    }
}
