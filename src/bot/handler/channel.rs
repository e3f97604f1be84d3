use serenity::all::{Context, GuildChannel, Message};

use crate::{service::ticket::TicketService, state::AppState};

/// Handle channel deletion.
///
/// A ticket channel removed by anyone other than the deletion scheduler still has an
/// open record; it is closed here so the member's ticket cap is released.
pub async fn handle_channel_delete(
    state: &AppState,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let channel_id = channel.id.get();

    match TicketService::new(state)
        .handle_channel_deleted(channel_id)
        .await
    {
        Ok(true) => tracing::info!(
            "Closed ticket for deleted channel {} in guild {}",
            channel_id,
            channel.guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to close ticket for deleted channel {}: {}",
            channel_id,
            e
        ),
    }
}
