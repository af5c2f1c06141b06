use async_trait::async_trait;

use crate::domain::StoragePath;

use super::ImageStoreError;

#[async_trait]
pub trait ImageCaptioner: Send + Sync {
    async fn caption(&self, path: &StoragePath) -> Result<CaptionOutcome, CaptionError>;
}

/// What the captioning stage produced for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionOutcome {
    /// A provider returned usable text.
    Generated {
        text: String,
        provider: &'static str,
    },
    /// Every provider was unavailable and the placeholder policy supplied text.
    Placeholder(String),
    /// Every provider was unavailable and the policy is to report no caption.
    Exhausted,
    /// No endpoint or key configured; no request was attempted.
    Disabled,
}

impl CaptionOutcome {
    pub fn into_caption(self) -> Option<String> {
        match self {
            CaptionOutcome::Generated { text, .. } | CaptionOutcome::Placeholder(text) => {
                Some(text)
            }
            CaptionOutcome::Exhausted | CaptionOutcome::Disabled => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("stored image unreadable: {0}")]
    ImageUnreadable(#[from] ImageStoreError),
    #[error("captioning failed: {0}")]
    Unexpected(String),
}
