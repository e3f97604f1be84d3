use serenity::all::{Context, Message};

use crate::{service::ticket::TicketService, state::AppState};

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, _ctx: Context, message: Message) {
    // Only track messages in guild channels (not DMs)
    if message.guild_id.is_none() {
        return;
    }

    let channel_id = message.channel_id.get();
    let timestamp = message.timestamp.to_utc();

    match TicketService::new(state)
        .record_activity(channel_id, timestamp)
        .await
    {
        Ok(true) => tracing::debug!(
            "Updated last activity for ticket channel {} to {}",
            channel_id,
            timestamp
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to update last activity for channel {}: {}",
            channel_id,
            e
        ),
    }
}
