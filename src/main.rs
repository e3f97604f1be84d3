use std::sync::Arc;

use serenity::http::Http;

use ticketdesk::{
    bot, config::Config, error::AppError, platform::discord::DiscordPlatform,
    scheduler::auto_close, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let http = Arc::new(Http::new(&config.discord_token));
    let platform = Arc::new(DiscordPlatform::new(http));
    let state = AppState::new(db, platform, config.transcript_dir.clone());

    tracing::info!(
        "Writing transcripts to {}",
        state.transcripts.dir().display()
    );

    auto_close::start_scheduler(state.clone()).await?;

    bot::start::start_bot(&config, state).await
}
