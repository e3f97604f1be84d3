//! Delayed, cancellable deletion of closed ticket channels.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{sync::Mutex, task::AbortHandle};

use crate::platform::ChatPlatform;

/// Time between a ticket closing and its channel being deleted.
pub const CHANNEL_DELETION_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct ChannelDeletionScheduler {
    platform: Arc<dyn ChatPlatform>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Arc<Mutex<HashMap<u64, (u64, AbortHandle)>>>,
}

impl ChannelDeletionScheduler {
    pub fn new(platform: Arc<dyn ChatPlatform>, delay: Duration) -> Self {
        Self {
            platform,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedules deletion of a channel after the configured delay.
    ///
    /// Scheduling a channel that is already pending replaces the earlier deletion.
    /// A failed deletion is logged and not retried.
    pub async fn schedule(&self, channel_id: u64) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        let scheduler = self.clone();

        let mut pending = self.pending.lock().await;

        let task = tokio::spawn(async move {
            tokio::time::sleep(scheduler.delay).await;

            {
                let mut pending = scheduler.pending.lock().await;
                match pending.get(&channel_id) {
                    Some((current, _)) if *current == generation => {
                        pending.remove(&channel_id);
                    }
                    _ => return,
                }
            }

            if let Err(e) = scheduler.platform.delete_channel(channel_id).await {
                tracing::warn!("Failed to delete ticket channel {}: {}", channel_id, e);
            } else {
                tracing::debug!("Deleted ticket channel {}", channel_id);
            }
        });

        if let Some((_, previous)) = pending.insert(channel_id, (generation, task.abort_handle()))
        {
            previous.abort();
        }
    }

    /// Cancels a pending deletion.
    ///
    /// # Returns
    /// - `true` if a deletion was pending and has been cancelled
    pub async fn cancel(&self, channel_id: u64) -> bool {
        match self.pending.lock().await.remove(&channel_id) {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub async fn is_pending(&self, channel_id: u64) -> bool {
        self.pending.lock().await.contains_key(&channel_id)
    }
}
