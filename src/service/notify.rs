use crate::platform::{ChatPlatform, OutboundMessage};

/// Posts a log entry to a guild's log channel.
///
/// Log delivery never fails the calling operation; errors are logged and dropped.
pub async fn send_log(platform: &dyn ChatPlatform, log_channel_id: u64, message: OutboundMessage) {
    if let Err(e) = platform.send_message(log_channel_id, message).await {
        tracing::warn!(
            "Failed to send log message to channel {}: {}",
            log_channel_id,
            e
        );
    }
}
