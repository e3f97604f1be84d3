use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::{
    platform::ChatPlatform,
    service::{
        admission::AdmissionLocks,
        deletion::{ChannelDeletionScheduler, CHANNEL_DELETION_DELAY},
        draft::{DraftStore, MemoryDraftStore},
        transcript::TranscriptStore,
    },
};

/// Shared state handed to interaction handlers, event handlers, and scheduled jobs.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub platform: Arc<dyn ChatPlatform>,
    pub drafts: Arc<dyn DraftStore>,
    pub deletions: ChannelDeletionScheduler,
    pub transcripts: TranscriptStore,
    pub admission: AdmissionLocks,
}

impl AppState {
    /// Creates state with an in-memory draft store and the standard deletion delay.
    pub fn new(
        db: DatabaseConnection,
        platform: Arc<dyn ChatPlatform>,
        transcript_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            db,
            deletions: ChannelDeletionScheduler::new(platform.clone(), CHANNEL_DELETION_DELAY),
            platform,
            drafts: Arc::new(MemoryDraftStore::default()),
            transcripts: TranscriptStore::new(transcript_dir),
            admission: AdmissionLocks::new(),
        }
    }
}
