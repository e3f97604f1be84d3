//! Registers the bot's slash commands globally.
//!
//! Reads `DISCORD_TOKEN` and `CLIENT_ID`, pushes the command schema, and exits.

use serenity::all::{ApplicationId, Command};
use serenity::http::Http;

use ticketdesk::{bot::commands, config::DeployConfig, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = DeployConfig::from_env()?;

    let http = Http::new(&config.discord_token);
    http.set_application_id(ApplicationId::new(config.client_id));

    let commands = commands::all();
    tracing::info!(
        "Started refreshing {} application (/) commands.",
        commands.len()
    );

    let registered = Command::set_global_commands(&http, commands).await?;

    tracing::info!(
        "Successfully reloaded {} application (/) commands.",
        registered.len()
    );

    Ok(())
}
