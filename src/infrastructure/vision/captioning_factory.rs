use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::CaptionProvider;
use crate::application::services::{Captioning, ExhaustedPolicy};
use crate::presentation::config::{ExhaustedPolicySetting, VisionSettings};

use super::{AzureDescribeProvider, AzureImageAnalysisProvider};

#[derive(Debug, thiserror::Error)]
pub enum CaptioningFactoryError {
    #[error("http client initialization failed: {0}")]
    ClientBuild(String),
}

pub struct CaptioningFactory;

impl CaptioningFactory {
    /// Builds the provider chain, Image Analysis 4.0 first and the v3.2
    /// describe contract second. Missing or blank endpoint/key yields
    /// [`Captioning::Disabled`].
    pub fn create(settings: &VisionSettings) -> Result<Captioning, CaptioningFactoryError> {
        let endpoint = settings.endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty());
        let api_key = settings.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty());

        let (Some(endpoint), Some(api_key)) = (endpoint, api_key) else {
            tracing::warn!(
                "Azure Vision endpoint/key not set; uploads will be stored without captions"
            );
            return Ok(Captioning::Disabled);
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| CaptioningFactoryError::ClientBuild(e.to_string()))?;

        let providers: Vec<Arc<dyn CaptionProvider>> = vec![
            Arc::new(AzureImageAnalysisProvider::new(client.clone(), endpoint, api_key)),
            Arc::new(AzureDescribeProvider::new(client, endpoint, api_key)),
        ];

        let on_exhausted = match settings.on_exhausted {
            ExhaustedPolicySetting::Placeholder => {
                ExhaustedPolicy::Placeholder(settings.placeholder_caption.clone())
            }
            ExhaustedPolicySetting::Fail => ExhaustedPolicy::MarkFailed,
        };

        tracing::info!(
            endpoint = %endpoint,
            timeout_secs = settings.timeout_secs,
            on_exhausted = ?on_exhausted,
            "Azure Vision captioning enabled"
        );

        Ok(Captioning::Enabled {
            providers,
            on_exhausted,
        })
    }
}
