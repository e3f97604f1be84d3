//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake completes. Logs the bot
//! identity and sets the presence shown in member lists.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("for tickets")));
}
