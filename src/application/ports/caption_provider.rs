use async_trait::async_trait;
use bytes::Bytes;

/// One captioning API contract. Implementations never fail: every fault is
/// reported as [`ProviderOutcome::Unavailable`] so the caller can move on to
/// the next contract.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn caption(&self, image: Bytes) -> ProviderOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// Trimmed answer. Blank when the provider answered with whitespace only,
    /// which fails the record rather than trying the next contract.
    Success(String),
    Unavailable(ProviderUnavailable),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderUnavailable {
    #[error("request timed out")]
    TimedOut,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("status {status}: {body}")]
    ErrorStatus { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("response contained no caption")]
    NoCaption,
}
