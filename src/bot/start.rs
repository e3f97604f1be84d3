use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Starts the Discord bot in a blocking manner
///
/// Creates the gateway client with the ticket event handler and runs it until the
/// connection shuts down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
