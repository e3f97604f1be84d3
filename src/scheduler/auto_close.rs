use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::ticket::TicketService, state::AppState};

/// Starts the auto-close scheduler
///
/// This scheduler runs every minute and closes open tickets whose last activity is
/// older than their guild's auto-close window. Guilds with auto-close disabled are
/// skipped.
///
/// # Arguments
/// - `state`: Shared application state
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            process_auto_close(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Ticket auto-close scheduler started");

    Ok(())
}

/// Closes stale tickets across all guilds
async fn process_auto_close(state: &AppState) {
    match TicketService::new(state).auto_close_stale(Utc::now()).await {
        Ok(0) => {}
        Ok(closed) => tracing::info!("Auto-closed {} inactive tickets", closed),
        Err(e) => tracing::error!("Error processing ticket auto-close: {}", e),
    }
}
