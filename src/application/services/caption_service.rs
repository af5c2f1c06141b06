use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    CaptionError, CaptionOutcome, CaptionProvider, ImageCaptioner, ImageStore, ProviderOutcome,
};
use crate::domain::StoragePath;

pub const PLACEHOLDER_CAPTION: &str = "A beautiful picture.";

/// What to report once every provider in the chain was unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExhaustedPolicy {
    /// Hand back fixed text; the image ends up `COMPLETED`.
    Placeholder(String),
    /// Report no caption; the image ends up `FAILED`.
    MarkFailed,
}

impl ExhaustedPolicy {
    fn resolve(&self) -> CaptionOutcome {
        match self {
            ExhaustedPolicy::Placeholder(text) => CaptionOutcome::Placeholder(text.clone()),
            ExhaustedPolicy::MarkFailed => CaptionOutcome::Exhausted,
        }
    }
}

impl Default for ExhaustedPolicy {
    fn default() -> Self {
        ExhaustedPolicy::Placeholder(PLACEHOLDER_CAPTION.to_string())
    }
}

pub enum Captioning {
    Disabled,
    Enabled {
        providers: Vec<Arc<dyn CaptionProvider>>,
        on_exhausted: ExhaustedPolicy,
    },
}

/// Reads a stored image once and walks the provider chain in order until one
/// of them produces a caption.
pub struct CaptionService {
    captioning: Captioning,
    image_store: Arc<dyn ImageStore>,
}

impl CaptionService {
    pub fn new(captioning: Captioning, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            captioning,
            image_store,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.captioning, Captioning::Enabled { .. })
    }
}

#[async_trait]
impl ImageCaptioner for CaptionService {
    #[tracing::instrument(skip(self), fields(path = %path))]
    async fn caption(&self, path: &StoragePath) -> Result<CaptionOutcome, CaptionError> {
        let (providers, on_exhausted) = match &self.captioning {
            Captioning::Disabled => {
                tracing::warn!("Captioning disabled: vision endpoint or key not configured");
                return Ok(CaptionOutcome::Disabled);
            }
            Captioning::Enabled {
                providers,
                on_exhausted,
            } => (providers, on_exhausted),
        };

        let image = self.image_store.fetch(path).await?;
        tracing::debug!(bytes = image.len(), "Loaded image for captioning");

        for provider in providers {
            match provider.caption(image.clone()).await {
                ProviderOutcome::Success(text) => {
                    tracing::info!(provider = provider.name(), "Caption generated");
                    return Ok(CaptionOutcome::Generated {
                        text,
                        provider: provider.name(),
                    });
                }
                ProviderOutcome::Unavailable(reason) => {
                    tracing::warn!(
                        provider = provider.name(),
                        reason = %reason,
                        "Caption provider unavailable"
                    );
                }
            }
        }

        let outcome = on_exhausted.resolve();
        tracing::warn!(
            providers = providers.len(),
            outcome = ?outcome,
            "All caption providers unavailable, applying exhausted policy"
        );
        Ok(outcome)
    }
}
