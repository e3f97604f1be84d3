//! Per-member serialization of ticket admission.
//!
//! The open-ticket cap is checked and a ticket persisted under a lock keyed by
//! `(guild_id, user_id)`, so two concurrent creations by the same member cannot both
//! pass the check.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct AdmissionLocks {
    locks: Arc<Mutex<HashMap<(u64, u64), Arc<Mutex<()>>>>>,
}

impl AdmissionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and holds the admission lock of a member until the guard is dropped.
    pub async fn acquire(&self, guild_id: u64, user_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Entries only referenced by the map are idle
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry((guild_id, user_id)).or_default().clone()
        };

        lock.lock_owned().await
    }
}
