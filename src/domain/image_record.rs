use chrono::{DateTime, Utc};

use super::{ImageId, OwnerId, ProcessingStatus, StoragePath};

/// One uploaded image with its caption and processing status.
///
/// `caption` is `Some` exactly when `status` is [`ProcessingStatus::Completed`].
/// The transition methods below keep that invariant; change both fields
/// through them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub id: ImageId,
    pub owner: OwnerId,
    pub image: StoragePath,
    pub caption: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub status: ProcessingStatus,
}

impl ImageRecord {
    pub fn new(owner: OwnerId, filename: &str) -> Self {
        let id = ImageId::new();
        Self {
            id,
            owner,
            image: StoragePath::new(&id, filename),
            caption: None,
            uploaded_at: Utc::now(),
            status: ProcessingStatus::Pending,
        }
    }

    pub fn start_processing(&mut self) {
        self.status = ProcessingStatus::Processing;
    }

    /// Settles the record: a non-blank caption completes it, anything else fails it.
    pub fn finish(&mut self, caption: Option<String>) {
        match caption.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) {
            Some(text) => {
                self.caption = Some(text);
                self.status = ProcessingStatus::Completed;
            }
            None => self.fail(),
        }
    }

    pub fn fail(&mut self) {
        self.caption = None;
        self.status = ProcessingStatus::Failed;
    }

    /// Manual caption edit. Returns `false` and leaves the record untouched
    /// when the caption is blank.
    pub fn edit_caption(&mut self, caption: &str) -> bool {
        let trimmed = caption.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.caption = Some(trimmed.to_string());
        self.status = ProcessingStatus::Completed;
        true
    }
}
