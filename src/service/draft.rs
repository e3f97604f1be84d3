//! Temporary storage for ticket forms awaiting a category choice.
//!
//! A draft is written when the ticket form is submitted and consumed when the member
//! picks a category. Drafts are keyed by guild, member, and the counter value reserved
//! at submission, and expire after [`DRAFT_TTL`].

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use tokio::{sync::Mutex, time::Instant};

/// Lifetime of an unconsumed draft.
pub const DRAFT_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftKey {
    pub guild_id: u64,
    pub user_id: u64,
    pub counter: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub ticket_id: String,
    pub subject: String,
    pub description: String,
}

#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn insert(&self, key: DraftKey, draft: TicketDraft);

    /// Returns the draft if present and not expired.
    async fn get(&self, key: &DraftKey) -> Option<TicketDraft>;

    async fn remove(&self, key: &DraftKey);
}

/// In-process [`DraftStore`] with lazy expiry.
pub struct MemoryDraftStore {
    ttl: Duration,
    drafts: Mutex<HashMap<DraftKey, (TicketDraft, Instant)>>,
}

impl MemoryDraftStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            drafts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryDraftStore {
    fn default() -> Self {
        Self::new(DRAFT_TTL)
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn insert(&self, key: DraftKey, draft: TicketDraft) {
        let now = Instant::now();
        let mut drafts = self.drafts.lock().await;

        drafts.retain(|_, (_, inserted_at)| now.duration_since(*inserted_at) < self.ttl);
        drafts.insert(key, (draft, now));
    }

    async fn get(&self, key: &DraftKey) -> Option<TicketDraft> {
        let drafts = self.drafts.lock().await;

        drafts
            .get(key)
            .filter(|(_, inserted_at)| inserted_at.elapsed() < self.ttl)
            .map(|(draft, _)| draft.clone())
    }

    async fn remove(&self, key: &DraftKey) {
        self.drafts.lock().await.remove(key);
    }
}
