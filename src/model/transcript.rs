use chrono::{DateTime, Utc};

/// An attachment reference rendered into a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptAttachment {
    pub name: String,
    pub url: String,
}

/// A channel message as captured for a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub timestamp: DateTime<Utc>,
    pub author_tag: String,
    pub content: String,
    pub attachments: Vec<TranscriptAttachment>,
}
