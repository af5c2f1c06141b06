use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{CaptionProvider, ProviderOutcome, ProviderUnavailable};

use super::azure_vision_http::{answered_caption, post_image};

/// Legacy Computer Vision v3.2 `describe`, asking for a single English candidate.
pub struct AzureDescribeProvider {
    client: Client,
    url: String,
    api_key: String,
}

impl AzureDescribeProvider {
    pub fn new(client: Client, endpoint: &str, api_key: &str) -> Self {
        let url = format!(
            "{}/vision/v3.2/describe?maxCandidates=1&language=en",
            endpoint.trim_end_matches('/'),
        );
        Self {
            client,
            url,
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct DescribeResponse {
    #[serde(default)]
    description: Description,
}

#[derive(Deserialize, Default)]
struct Description {
    #[serde(default)]
    captions: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    text: Option<String>,
}

#[async_trait]
impl CaptionProvider for AzureDescribeProvider {
    fn name(&self) -> &'static str {
        "azure-describe-v3.2"
    }

    async fn caption(&self, image: Bytes) -> ProviderOutcome {
        tracing::debug!(bytes = image.len(), "Requesting caption from Vision v3.2 describe");

        let response: DescribeResponse =
            match post_image(&self.client, &self.url, &self.api_key, image).await {
                Ok(r) => r,
                Err(reason) => return ProviderOutcome::Unavailable(reason),
            };

        let first = response
            .description
            .captions
            .into_iter()
            .next()
            .and_then(|c| answered_caption(c.text));

        match first {
            Some(text) => ProviderOutcome::Success(text),
            None => ProviderOutcome::Unavailable(ProviderUnavailable::NoCaption),
        }
    }
}
